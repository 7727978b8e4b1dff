//! # Error Types — Structured Error Hierarchy
//!
//! Every failure in the codec is an [`MrzError`] variant. Callers branch on
//! the variant; operators read the `Display` output, which always names the
//! offending field and the nature of the violation.
//!
//! ## Design
//!
//! - Character violations carry the offending character and its 1-based
//!   position within the field or line.
//! - Length violations carry the expected and actual lengths.
//! - Encoder-side semantic failures (`MissingField`, `InvalidValue`,
//!   `InvalidFormat`) name the travel-document field.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, MrzError>;

/// Top-level error type for MRZ encoding, decoding and validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MrzError {
    /// A required argument was absent.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was missing or malformed.
        reason: String,
    },

    /// A line or field does not have its fixed width.
    #[error("{field} must be exactly {expected} characters long, got {actual}")]
    InvalidLength {
        /// Line or field name.
        field: &'static str,
        /// Required length.
        expected: usize,
        /// Observed length.
        actual: usize,
    },

    /// A character outside the permitted set for the field.
    #[error("{field} contains invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Line or field name.
        field: &'static str,
        /// The rejected character.
        character: char,
        /// 1-based position of the character.
        position: usize,
    },

    /// A required field is absent or blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Field name.
        field: &'static str,
    },

    /// A field holds a value outside its permitted domain.
    #[error("{reason}")]
    InvalidValue {
        /// Field name.
        field: &'static str,
        /// Human-readable description, e.g. `sex must be one of M/F/X/<, got 'Z'`.
        reason: String,
    },

    /// A field does not match its required shape.
    #[error("{field} {reason}")]
    InvalidFormat {
        /// Field name.
        field: &'static str,
        /// Human-readable description of the expected shape.
        reason: String,
    },
}

impl MrzError {
    /// The field or line the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { .. } => None,
            Self::InvalidLength { field, .. }
            | Self::InvalidCharacter { field, .. }
            | Self::MissingField { field }
            | Self::InvalidValue { field, .. }
            | Self::InvalidFormat { field, .. } => Some(*field),
        }
    }
}

/// Error loading codec configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidVariable {
        /// Variable name.
        var: &'static str,
        /// Raw value found.
        value: String,
    },

    /// The name field length is outside `1..=39`.
    #[error("name field length must be between 1 and {max}, got {actual}")]
    NameFieldLength {
        /// Upper bound (the width left on line 1).
        max: usize,
        /// Requested length.
        actual: usize,
    },
}
