//! # TD-3 Decoder
//!
//! Slices a validated line pair into an [`MrzRecord`]. Human-readable
//! values (names, codes) are filler-stripped; dates, check-digit-covered
//! numbers and check digits are kept exactly as found. Decoding never
//! judges check digits or sex codes; only the alphabet and line lengths
//! are enforced here.

use crate::charset::{strip_fillers, NAME_SEPARATOR};
use crate::error::Result;
use crate::layout;
use crate::lines::MrzLines;
use crate::record::{MrzRecord, Sex};

/// Decode two raw TD-3 lines.
///
/// # Errors
///
/// - [`MrzError::InvalidCharacter`](crate::MrzError::InvalidCharacter) when
///   normalization rejects a character.
/// - [`MrzError::InvalidLength`](crate::MrzError::InvalidLength) when a line
///   is not 44 characters after normalization.
pub fn decode(line1: &str, line2: &str) -> Result<MrzRecord> {
    decode_lines(&MrzLines::new(line1, line2)?)
}

/// Decode lines that may be absent (e.g. nullable JSON input).
///
/// # Errors
///
/// Returns [`MrzError::InvalidInput`](crate::MrzError::InvalidInput) if
/// either line is `None`, otherwise the errors of [`decode`].
pub fn decode_optional(line1: Option<&str>, line2: Option<&str>) -> Result<MrzRecord> {
    match (line1, line2) {
        (Some(line1), Some(line2)) => decode(line1, line2),
        _ => Err(crate::MrzError::InvalidInput {
            reason: "both MRZ lines must be provided".to_string(),
        }),
    }
}

/// Decode an already validated line pair.
pub fn decode_lines(lines: &MrzLines) -> Result<MrzRecord> {
    let l1 = lines.line1();
    let l2 = lines.line2();
    let at = |i: usize| char::from(l2.as_bytes()[i]);

    let (surname, given_names) = split_names(&l1[layout::NAMES]);

    let record = MrzRecord::builder()
        .document_type(strip_fillers(&l1[layout::DOCUMENT_TYPE]))
        .issuing_country(strip_fillers(&l1[layout::ISSUING_COUNTRY]))
        .surname(surname)
        .given_names(given_names)
        .document_number(&l2[layout::DOCUMENT_NUMBER])
        .document_number_check(at(layout::DOCUMENT_NUMBER_CHECK))
        .nationality(strip_fillers(&l2[layout::NATIONALITY]))
        .birth_date(&l2[layout::BIRTH_DATE])
        .birth_date_check(at(layout::BIRTH_DATE_CHECK))
        .sex(Sex::from_mrz_char(at(layout::SEX)))
        .expiry_date(&l2[layout::EXPIRY_DATE])
        .expiry_date_check(at(layout::EXPIRY_DATE_CHECK))
        .personal_number(&l2[layout::PERSONAL_NUMBER])
        .personal_number_check(at(layout::PERSONAL_NUMBER_CHECK))
        .composite_check(at(layout::COMPOSITE_CHECK))
        .source(lines.clone())
        .build()?;

    tracing::debug!(
        document_type = record.document_type(),
        issuing_country = record.issuing_country(),
        "decoded TD-3 zone"
    );
    Ok(record)
}

/// Split the name field on the first `<<`. Without a separator the whole
/// field is the surname.
fn split_names(field: &str) -> (String, String) {
    match field.split_once(NAME_SEPARATOR) {
        Some((surname, given)) => (strip_fillers(surname), strip_fillers(given)),
        None => (strip_fillers(field), String::new()),
    }
}
