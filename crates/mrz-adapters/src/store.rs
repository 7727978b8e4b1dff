//! # Travel-Document Store Interface
//!
//! The `DocumentStore` trait abstracts over the system of record holding
//! issued travel documents. No persistent store ships with this crate;
//! [`MockDocumentStore`] answers every well-formed id with one fixed
//! record so that issuance can be exercised end to end.

use mrz_core::{MrzError, TravelDocument};

use crate::adapter::AdapterHealth;

/// Errors from document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document id is blank or malformed.
    #[error("invalid document id: {reason}")]
    InvalidId {
        /// Description of the validation failure.
        reason: String,
    },

    /// No document exists under the id.
    #[error("document not found: {id}")]
    NotFound { id: String },

    /// The backing store is unreachable.
    #[error("document store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The store holds a record the codec cannot accept.
    #[error("stored document is invalid: {0}")]
    InvalidRecord(#[from] MrzError),
}

/// Adapter trait for travel-document lookup.
pub trait DocumentStore: Send + Sync {
    /// Fetch the document stored under `id`.
    fn lookup_document(&self, id: &str) -> Result<TravelDocument, StoreError>;

    fn health(&self) -> AdapterHealth;

    /// Human-readable name of this implementation.
    fn adapter_name(&self) -> &str;
}

/// Reject blank ids before any store is consulted.
pub fn validate_document_id(id: &str) -> Result<&str, StoreError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidId {
            reason: "document id must not be blank".to_string(),
        });
    }
    Ok(trimmed)
}

/// Mock store returning the same passport for every id.
#[derive(Debug, Clone, Default)]
pub struct MockDocumentStore;

impl MockDocumentStore {
    fn record() -> Result<TravelDocument, MrzError> {
        TravelDocument::builder()
            .document_type("P")
            .country_code("USA")
            .surname("DOE")
            .given_names(["JOHN", "MICHAEL"])
            .document_number("123456789")
            .nationality("USA")
            .birth_date("900101")
            .sex("M")
            .expiry_date("300101")
            .personal_number("987654321")
            .build()
    }
}

impl DocumentStore for MockDocumentStore {
    fn lookup_document(&self, id: &str) -> Result<TravelDocument, StoreError> {
        let id = validate_document_id(id)?;
        tracing::debug!(adapter = self.adapter_name(), id, "returning mock document");
        Ok(Self::record()?)
    }

    fn health(&self) -> AdapterHealth {
        AdapterHealth::Degraded {
            reason: "mock store returns a fixed record".to_string(),
        }
    }

    fn adapter_name(&self) -> &str {
        "MockDocumentStore"
    }
}
