//! # TD-3 Encoder
//!
//! Validates a [`TravelDocument`], formats each field to its fixed width,
//! computes the check digits and assembles the two 44-character lines.
//!
//! ## Validation
//!
//! | field | rule | error |
//! |-------|------|-------|
//! | required fields | present and non-blank | `MissingField` |
//! | surname, given names | non-empty after punctuation is dropped | `MissingField` |
//! | document type | 1-2 characters, `A-Z0-9<` | `InvalidFormat` |
//! | country code, nationality | exactly 3 letters | `InvalidFormat` |
//! | birth date, expiry date | exactly 6 digits (`YYMMDD`) | `InvalidFormat` |
//! | sex | `M`, `F`, `X` or `<` | `InvalidValue` |
//! | document number, personal number | `A-Z0-9<` | `InvalidCharacter` |
//!
//! Dates are not checked against the calendar: `741312` is accepted.

use crate::charset::{format_name_field, pad_field, validate_charset, CharClass, FILLER};
use crate::check_digit::check_digit_char;
use crate::config::CodecConfig;
use crate::document::TravelDocument;
use crate::error::{MrzError, Result};
use crate::layout::{self, width, LINE_LENGTH, NAME_FIELD_CAPACITY};
use crate::lines::MrzLines;
use crate::record::Sex;

/// TD-3 encoder with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    config: CodecConfig,
}

/// Encode with the default configuration.
pub fn encode(document: &TravelDocument) -> Result<MrzLines> {
    Encoder::default().encode(document)
}

impl Encoder {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode `document` into a validated line pair.
    ///
    /// # Errors
    ///
    /// See the module-level validation table.
    pub fn encode(&self, document: &TravelDocument) -> Result<MrzLines> {
        let document_type = document_type_field(document.document_type())?;
        let country = three_letter_code("country_code", document.country_code())?;
        let nationality = three_letter_code("nationality", document.nationality())?;
        let birth_date = yymmdd("birth_date", document.birth_date())?;
        let expiry_date = yymmdd("expiry_date", document.expiry_date())?;
        let sex = encodable_sex(document.sex())?;
        let document_number = code_field(
            "document_number",
            document.document_number(),
            width(&layout::DOCUMENT_NUMBER),
        )?;
        let personal_number = code_field(
            "personal_number",
            document.personal_number().unwrap_or_default(),
            width(&layout::PERSONAL_NUMBER),
        )?;

        let names = format_name_field(
            document.surname(),
            document.given_names(),
            self.config.name_field_length(),
        )?;

        let document_number_check = check_digit_char(&document_number)?;
        let birth_date_check = check_digit_char(&birth_date)?;
        let expiry_date_check = check_digit_char(&expiry_date)?;
        let personal_number_check = check_digit_char(&personal_number)?;
        let composite_check = check_digit_char(&composite_input(
            &document_number,
            document_number_check,
            &birth_date,
            birth_date_check,
            &expiry_date,
            expiry_date_check,
            &personal_number,
            personal_number_check,
        ))?;

        let line1 = format!(
            "{document_type}{country}{}",
            pad_field(&names, NAME_FIELD_CAPACITY)
        );
        let line2 = pad_field(
            &format!(
                "{document_number}{document_number_check}{nationality}\
                 {birth_date}{birth_date_check}{sex}\
                 {expiry_date}{expiry_date_check}\
                 {personal_number}{personal_number_check}{composite_check}",
                sex = sex.as_char(),
            ),
            LINE_LENGTH,
        );

        let lines = MrzLines::from_assembled(line1, line2)?;
        tracing::debug!(
            document_type = %document_type,
            issuing_country = %country,
            name_field_length = self.config.name_field_length(),
            "encoded TD-3 zone"
        );
        Ok(lines)
    }
}

/// Concatenation covered by the composite check digit.
#[allow(clippy::too_many_arguments)]
pub(crate) fn composite_input(
    document_number: &str,
    document_number_check: char,
    birth_date: &str,
    birth_date_check: char,
    expiry_date: &str,
    expiry_date_check: char,
    personal_number: &str,
    personal_number_check: char,
) -> String {
    format!(
        "{document_number}{document_number_check}{birth_date}{birth_date_check}\
         {expiry_date}{expiry_date_check}{personal_number}{personal_number_check}"
    )
}

fn document_type_field(raw: &str) -> Result<String> {
    let value = raw.trim().to_ascii_uppercase().replace(' ', "<");
    let len = value.chars().count();
    if !(1..=width(&layout::DOCUMENT_TYPE)).contains(&len) {
        return Err(MrzError::InvalidFormat {
            field: "document_type",
            reason: format!("must be 1-2 characters, got {len}"),
        });
    }
    if let Some(c) = value.chars().find(|c| !CharClass::AlphanumericAndFiller.admits(*c)) {
        return Err(MrzError::InvalidFormat {
            field: "document_type",
            reason: format!("must use A-Z, 0-9 or '<', got '{c}'"),
        });
    }
    Ok(pad_field(&value, width(&layout::DOCUMENT_TYPE)))
}

fn three_letter_code(field: &'static str, raw: &str) -> Result<String> {
    let value = raw.trim().to_ascii_uppercase();
    if value.len() != 3 || !value.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(MrzError::InvalidFormat {
            field,
            reason: format!("must be exactly 3 letters, got '{}'", raw.trim()),
        });
    }
    Ok(value)
}

fn yymmdd(field: &'static str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.len() != 6 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(MrzError::InvalidFormat {
            field,
            reason: format!("must be 6 digits in YYMMDD format, got '{value}'"),
        });
    }
    Ok(value.to_string())
}

fn encodable_sex(raw: &str) -> Result<Sex> {
    let sex = Sex::parse(raw)?;
    let c = sex.as_char().to_string();
    validate_charset("sex", &c, CharClass::LettersAndFiller)?;
    Ok(sex)
}

/// Uppercase, map spaces to fillers, check the alphabet and pad to `len`.
fn code_field(field: &'static str, raw: &str, len: usize) -> Result<String> {
    let value: String = raw
        .trim()
        .chars()
        .map(|c| if c == ' ' { FILLER } else { c.to_ascii_uppercase() })
        .collect();
    validate_charset(field, &value, CharClass::AlphanumericAndFiller)?;
    Ok(pad_field(&value, len))
}
