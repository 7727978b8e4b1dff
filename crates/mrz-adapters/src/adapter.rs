//! # Adapter Health and Identification
//!
//! Common vocabulary for the external collaborators of the codec. Every
//! scanner and document store reports which kind of adapter it is, a
//! human-readable implementation name, and its current health, so that a
//! deployment can verify its wiring before serving requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Collaborator family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdapterKind {
    /// MRZ reader hardware or service.
    Scanner,
    /// Travel-document lookup.
    DocumentStore,
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scanner => f.pad("Scanner"),
            Self::DocumentStore => f.pad("DocumentStore"),
        }
    }
}

/// Health status of a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdapterHealth {
    /// Reachable and operational.
    Healthy,
    /// Operational with reduced fidelity (e.g. returns fixed mock data).
    Degraded {
        /// Human-readable reason for the degraded state.
        reason: String,
    },
    /// Not reachable or not configured.
    Unavailable {
        /// Human-readable reason for unavailability.
        reason: String,
    },
}

impl AdapterHealth {
    /// Whether the adapter can serve requests at all.
    pub fn is_usable(&self) -> bool {
        !matches!(self, Self::Unavailable { .. })
    }
}

impl fmt::Display for AdapterHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "Healthy"),
            Self::Degraded { reason } => write!(f, "Degraded: {reason}"),
            Self::Unavailable { reason } => write!(f, "Unavailable: {reason}"),
        }
    }
}

/// Descriptor for one collaborator, returned by
/// [`MrzService::probe`](crate::service::MrzService::probe).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterDescriptor {
    pub kind: AdapterKind,
    /// Implementation name, e.g. `"MockDocumentStore"`.
    pub adapter_name: String,
    pub health: AdapterHealth,
}
