//! # MRZ Scanner Interface
//!
//! The `MrzScanner` trait abstracts over MRZ reader hardware. Production
//! deployments implement it against a physical reader; without one,
//! [`UnavailableScanner`] fails every scan with
//! [`ScannerError::Unavailable`] and returns no partial data.
//! [`MockScanner`] replays fixed lines for integration testing.

use mrz_core::MrzLines;

use crate::adapter::AdapterHealth;

/// Errors from scanner operations.
#[derive(Debug, thiserror::Error)]
pub enum ScannerError {
    /// No scanner is attached or configured.
    #[error("MRZ scanner unavailable: {reason}")]
    Unavailable {
        /// Why no scanner could be used.
        reason: String,
    },

    /// The scanner returned text that is not a valid TD-3 zone.
    #[error("MRZ scanner returned unreadable data: {source}")]
    ReadFailed {
        #[from]
        source: mrz_core::MrzError,
    },
}

/// Adapter trait for MRZ reader hardware.
///
/// Implementations must be `Send + Sync` so they can be shared behind an
/// `Arc`. The trait is object-safe to support runtime adapter selection.
pub trait MrzScanner: Send + Sync {
    /// Read one TD-3 zone.
    fn scan(&self) -> Result<MrzLines, ScannerError>;

    /// Probe the reader.
    fn health(&self) -> AdapterHealth;

    /// Human-readable name of this implementation.
    fn adapter_name(&self) -> &str;
}

/// Scanner used when no reader hardware is integrated.
#[derive(Debug, Clone, Default)]
pub struct UnavailableScanner;

const NO_SCANNER: &str = "hardware scanner integration not available";

impl MrzScanner for UnavailableScanner {
    fn scan(&self) -> Result<MrzLines, ScannerError> {
        tracing::warn!(adapter = self.adapter_name(), "scan requested without a scanner");
        Err(ScannerError::Unavailable {
            reason: NO_SCANNER.to_string(),
        })
    }

    fn health(&self) -> AdapterHealth {
        AdapterHealth::Unavailable {
            reason: NO_SCANNER.to_string(),
        }
    }

    fn adapter_name(&self) -> &str {
        "UnavailableScanner"
    }
}

/// Mock scanner returning the same zone on every scan.
#[derive(Debug, Clone)]
pub struct MockScanner {
    lines: MrzLines,
}

impl MockScanner {
    pub fn new(lines: MrzLines) -> Self {
        Self { lines }
    }

    /// Build from a two-line text block.
    ///
    /// # Errors
    ///
    /// Returns [`ScannerError::ReadFailed`] if `text` is not a valid zone.
    pub fn from_text(text: &str) -> Result<Self, ScannerError> {
        Ok(Self::new(MrzLines::parse(text)?))
    }
}

impl MrzScanner for MockScanner {
    fn scan(&self) -> Result<MrzLines, ScannerError> {
        Ok(self.lines.clone())
    }

    fn health(&self) -> AdapterHealth {
        AdapterHealth::Degraded {
            reason: "mock scanner replays fixed lines".to_string(),
        }
    }

    fn adapter_name(&self) -> &str {
        "MockScanner"
    }
}
