//! # mrz-adapters — Collaborator Interfaces for the MRZ Codec
//!
//! The codec in `mrz-core` is pure. Reading a physical document and looking
//! up issued documents are external concerns, modelled here as object-safe
//! traits:
//!
//! - [`MrzScanner`] reads one TD-3 zone. [`UnavailableScanner`] is the
//!   default and always fails; [`MockScanner`] replays fixed lines.
//! - [`DocumentStore`] fetches a [`TravelDocument`](mrz_core::TravelDocument)
//!   by id. [`MockDocumentStore`] returns one fixed passport.
//!
//! [`MrzService`] holds one of each behind `Arc` and exposes the two
//! workflows: scan → decode → validate, and lookup → encode.

pub mod adapter;
pub mod scanner;
pub mod service;
pub mod store;

pub use adapter::{AdapterDescriptor, AdapterHealth, AdapterKind};
pub use scanner::{MockScanner, MrzScanner, ScannerError, UnavailableScanner};
pub use service::{IssuedMrz, MrzService, ServiceError, VerifiedScan};
pub use store::{validate_document_id, DocumentStore, MockDocumentStore, StoreError};
