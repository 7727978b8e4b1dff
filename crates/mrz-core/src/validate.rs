//! # Check-Digit Validation
//!
//! Recomputes the four field check digits and the composite check digit of
//! a decoded record and compares them with the characters stored in it.
//! A record is intact only if all five match.

use serde::Serialize;

use crate::check_digit::check_digit_char;
use crate::encode::composite_input;
use crate::error::{MrzError, Result};
use crate::layout;
use crate::record::MrzRecord;

/// A check digit covered by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckedField {
    DocumentNumber,
    BirthDate,
    ExpiryDate,
    PersonalNumber,
    #[serde(rename = "composite_check")]
    Composite,
}

impl CheckedField {
    /// 1-based position of the check digit on line 2.
    pub fn position(self) -> usize {
        1 + match self {
            Self::DocumentNumber => layout::DOCUMENT_NUMBER_CHECK,
            Self::BirthDate => layout::BIRTH_DATE_CHECK,
            Self::ExpiryDate => layout::EXPIRY_DATE_CHECK,
            Self::PersonalNumber => layout::PERSONAL_NUMBER_CHECK,
            Self::Composite => layout::COMPOSITE_CHECK,
        }
    }

    /// Field name as used in records and messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::DocumentNumber => "document_number",
            Self::BirthDate => "birth_date",
            Self::ExpiryDate => "expiry_date",
            Self::PersonalNumber => "personal_number",
            Self::Composite => "composite_check",
        }
    }
}

impl std::fmt::Display for CheckedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One check digit that did not match its recomputed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckDigitMismatch {
    pub field: CheckedField,
    /// Digit recomputed from the record.
    pub expected: char,
    /// Character stored in the record.
    pub actual: char,
    /// 1-based position on line 2.
    pub position: usize,
}

impl std::fmt::Display for CheckDigitMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "check digit mismatch for {} at position {}: expected {}, got {}",
            self.field, self.position, self.expected, self.actual
        )
    }
}

/// Outcome of [`validate_check_digits`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CheckDigitReport {
    errors: Vec<CheckDigitMismatch>,
}

impl CheckDigitReport {
    /// True when every check digit matched.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// One entry per mismatched check digit, in line order.
    pub fn errors(&self) -> &[CheckDigitMismatch] {
        &self.errors
    }

    /// `(is_valid, errors)`.
    pub fn into_parts(self) -> (bool, Vec<CheckDigitMismatch>) {
        (self.errors.is_empty(), self.errors)
    }
}

/// Recompute every check digit of `record` and report mismatches.
///
/// # Errors
///
/// Returns [`MrzError::MissingField`] if a field needed for recomputation is
/// empty, which only happens for records not produced by the decoder.
pub fn validate_check_digits(record: &MrzRecord) -> Result<CheckDigitReport> {
    let document_number = non_empty(record.document_number(), "document_number")?;
    let birth_date = non_empty(record.birth_date(), "birth_date")?;
    let expiry_date = non_empty(record.expiry_date(), "expiry_date")?;
    let personal_number = non_empty(record.personal_number(), "personal_number")?;

    let composite = composite_input(
        document_number,
        record.document_number_check(),
        birth_date,
        record.birth_date_check(),
        expiry_date,
        record.expiry_date_check(),
        personal_number,
        record.personal_number_check(),
    );

    let checks = [
        (CheckedField::DocumentNumber, document_number, record.document_number_check()),
        (CheckedField::BirthDate, birth_date, record.birth_date_check()),
        (CheckedField::ExpiryDate, expiry_date, record.expiry_date_check()),
        (CheckedField::PersonalNumber, personal_number, record.personal_number_check()),
        (CheckedField::Composite, composite.as_str(), record.composite_check()),
    ];

    let mut errors = Vec::new();
    for (field, value, actual) in checks {
        let expected = recompute(field, value)?;
        if expected != actual {
            tracing::warn!(
                field = field.name(),
                %expected,
                %actual,
                "check digit mismatch"
            );
            errors.push(CheckDigitMismatch {
                field,
                expected,
                actual,
                position: field.position(),
            });
        }
    }
    Ok(CheckDigitReport { errors })
}

fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(MrzError::MissingField { field });
    }
    Ok(value)
}

/// Recompute one digit, attributing alphabet violations to `field`.
fn recompute(field: CheckedField, value: &str) -> Result<char> {
    check_digit_char(value).map_err(|err| match err {
        MrzError::InvalidCharacter {
            character,
            position,
            ..
        } => MrzError::InvalidCharacter {
            field: field.name(),
            character,
            position,
        },
        other => other,
    })
}
