//! # MRZ Service
//!
//! Wires an injected scanner and document store to the codec. The service
//! owns no state beyond its collaborators and encoder configuration.

use std::sync::Arc;

use mrz_core::{
    decode_lines, validate_check_digits, CheckDigitReport, Encoder, MrzError, MrzLines, MrzRecord,
    TravelDocument,
};
use serde::Serialize;

use crate::adapter::{AdapterDescriptor, AdapterKind};
use crate::scanner::{MrzScanner, ScannerError};
use crate::store::{DocumentStore, StoreError};

/// Errors surfaced by [`MrzService`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Scanner(#[from] ScannerError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Codec(#[from] MrzError),
}

/// Decoded scan together with its check-digit verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedScan {
    pub record: MrzRecord,
    pub report: CheckDigitReport,
}

impl VerifiedScan {
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

/// Stored document together with its freshly encoded MRZ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedMrz {
    pub document: TravelDocument,
    pub lines: MrzLines,
}

/// Front door for scan verification and MRZ issuance.
#[derive(Clone)]
pub struct MrzService {
    scanner: Arc<dyn MrzScanner>,
    store: Arc<dyn DocumentStore>,
    encoder: Encoder,
}

impl std::fmt::Debug for MrzService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MrzService")
            .field("scanner", &self.scanner.adapter_name())
            .field("store", &self.store.adapter_name())
            .field("encoder", &self.encoder)
            .finish()
    }
}

impl MrzService {
    pub fn new(scanner: Arc<dyn MrzScanner>, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            scanner,
            store,
            encoder: Encoder::default(),
        }
    }

    /// Replace the encoder used by [`issue_mrz`](Self::issue_mrz).
    pub fn with_encoder(mut self, encoder: Encoder) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// Scan one zone, decode it, and validate its check digits.
    ///
    /// A check-digit mismatch is not an error; it is reported in the
    /// returned [`VerifiedScan`].
    ///
    /// # Errors
    ///
    /// [`ServiceError::Scanner`] when the scanner fails,
    /// [`ServiceError::Codec`] when decoding or validation fails.
    pub fn scan_and_verify(&self) -> Result<VerifiedScan, ServiceError> {
        let lines = self.scanner.scan()?;
        let record = decode_lines(&lines)?;
        let report = validate_check_digits(&record)?;
        tracing::info!(
            scanner = self.scanner.adapter_name(),
            valid = report.is_valid(),
            mismatches = report.errors().len(),
            "scan verified"
        );
        Ok(VerifiedScan { record, report })
    }

    /// Look up a stored document and encode its MRZ.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Store`] when the lookup fails,
    /// [`ServiceError::Codec`] when the document cannot be encoded.
    pub fn issue_mrz(&self, id: &str) -> Result<IssuedMrz, ServiceError> {
        let document = self.store.lookup_document(id)?;
        let lines = self.encoder.encode(&document)?;
        tracing::info!(store = self.store.adapter_name(), "MRZ issued");
        Ok(IssuedMrz { document, lines })
    }

    /// Health of every collaborator.
    pub fn probe(&self) -> Vec<AdapterDescriptor> {
        vec![
            AdapterDescriptor {
                kind: AdapterKind::Scanner,
                adapter_name: self.scanner.adapter_name().to_string(),
                health: self.scanner.health(),
            },
            AdapterDescriptor {
                kind: AdapterKind::DocumentStore,
                adapter_name: self.store.adapter_name().to_string(),
                health: self.store.health(),
            },
        ]
    }
}

impl Default for MrzService {
    /// Unavailable scanner and mock store.
    fn default() -> Self {
        Self::new(
            Arc::new(crate::scanner::UnavailableScanner),
            Arc::new(crate::store::MockDocumentStore),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::AdapterHealth;
    use crate::scanner::MockScanner;
    use crate::store::MockDocumentStore;
    use mrz_core::CodecConfig;

    fn service_with(line2: &str) -> MrzService {
        let lines = MrzLines::new("P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<", line2).unwrap();
        MrzService::new(Arc::new(MockScanner::new(lines)), Arc::new(MockDocumentStore))
    }

    #[test]
    fn default_service_cannot_scan() {
        let err = MrzService::default().scan_and_verify().unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Scanner(ScannerError::Unavailable { .. })
        ));
    }

    #[test]
    fn scan_and_verify_valid_zone() {
        let scan = service_with("L898902C36UTO7408122F1204159ZE184226B<<<<<10")
            .scan_and_verify()
            .unwrap();
        assert!(scan.is_valid());
        assert_eq!(scan.record.surname(), "ERIKSSON");
    }

    #[test]
    fn scan_and_verify_reports_mismatch_without_failing() {
        let scan = service_with("L898902C36UTO7408122F1204159ZE184226B<<<<<11")
            .scan_and_verify()
            .unwrap();
        assert!(!scan.is_valid());
        assert_eq!(scan.report.errors().len(), 1);
    }

    #[test]
    fn issue_mrz_from_mock_store() {
        let issued = MrzService::default().issue_mrz("P-0001").unwrap();
        assert_eq!(
            issued.lines.line1(),
            "P<USADOE<<JOHN<MICHAEL<<<<<<<<<<<<<<<<<<<<<<"
        );
        assert_eq!(
            issued.lines.line2(),
            "1234567897USA9001011M3001019987654321<<<<<38"
        );
        assert_eq!(issued.document.surname(), "DOE");
    }

    #[test]
    fn issue_mrz_blank_id() {
        let err = MrzService::default().issue_mrz(" ").unwrap_err();
        assert!(matches!(err, ServiceError::Store(StoreError::InvalidId { .. })));
    }

    #[test]
    fn issue_mrz_honours_encoder_config() {
        let encoder = Encoder::new(CodecConfig::with_name_field_length(5).unwrap());
        let issued = MrzService::default()
            .with_encoder(encoder)
            .issue_mrz("P-0001")
            .unwrap();
        assert_eq!(issued.lines.line1(), format!("P<USADOE{}", "<".repeat(36)));
    }

    #[test]
    fn probe_reports_both_adapters() {
        let probe = MrzService::default().probe();
        assert_eq!(probe.len(), 2);
        assert_eq!(probe[0].kind, AdapterKind::Scanner);
        assert!(matches!(probe[0].health, AdapterHealth::Unavailable { .. }));
        assert_eq!(probe[1].adapter_name, "MockDocumentStore");
    }
}
