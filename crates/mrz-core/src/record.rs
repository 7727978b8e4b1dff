//! # Decoded MRZ Record
//!
//! [`MrzRecord`] is the structured form of a decoded TD-3 zone. Names and
//! codes are filler-stripped; fields covered by a check digit (document
//! number, dates, personal number) keep their exact on-line form so check
//! digits can be recomputed without loss. Check digits are kept as the raw
//! character found on the line and are never trusted without
//! [`validate_check_digits`](crate::validate::validate_check_digits).
//!
//! Records are built through [`MrzRecordBuilder`], which refuses to produce a
//! record with an absent field. Deserialization routes through the builder.

use serde::{Deserialize, Serialize};

use crate::charset::{strip_fillers, FILLER};
use crate::error::{MrzError, Result};
use crate::lines::MrzLines;

/// Sex marker at line 2, position 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// `M`
    Male,
    /// `F`
    Female,
    /// `X`
    Unspecified,
    /// `<`
    NotStated,
    /// Any other MRZ character found while decoding. Never encodable.
    Other(char),
}

impl Sex {
    /// Map the character found on a decoded line.
    pub fn from_mrz_char(c: char) -> Self {
        match c {
            'M' => Self::Male,
            'F' => Self::Female,
            'X' => Self::Unspecified,
            FILLER => Self::NotStated,
            other => Self::Other(other),
        }
    }

    /// Parse an encoder input value, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`MrzError::InvalidValue`] for anything other than
    /// `M`, `F`, `X` or `<`.
    pub fn parse(value: &str) -> Result<Self> {
        let upper = value.trim().to_ascii_uppercase();
        match upper.as_str() {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            "X" => Ok(Self::Unspecified),
            "<" => Ok(Self::NotStated),
            _ => Err(MrzError::InvalidValue {
                field: "sex",
                reason: format!("sex must be one of M/F/X/<, got '{}'", value.trim()),
            }),
        }
    }

    /// The character written on the line.
    pub fn as_char(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
            Self::Unspecified => 'X',
            Self::NotStated => FILLER,
            Self::Other(c) => c,
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Sex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let c = char::deserialize(deserializer)?;
        Ok(Self::from_mrz_char(c.to_ascii_uppercase()))
    }
}

/// A decoded TD-3 zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordRepr")]
pub struct MrzRecord {
    document_type: String,
    issuing_country: String,
    surname: String,
    given_names: String,
    document_number: String,
    document_number_check: char,
    nationality: String,
    birth_date: String,
    birth_date_check: char,
    sex: Sex,
    expiry_date: String,
    expiry_date_check: char,
    personal_number: String,
    personal_number_check: char,
    composite_check: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<MrzLines>,
}

impl MrzRecord {
    /// Start building a record.
    pub fn builder() -> MrzRecordBuilder {
        MrzRecordBuilder::default()
    }

    /// Document type with fillers removed, e.g. `P`.
    pub fn document_type(&self) -> &str {
        &self.document_type
    }

    /// Issuing state or organization (3-letter code).
    pub fn issuing_country(&self) -> &str {
        &self.issuing_country
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Given names separated by single spaces.
    pub fn given_names(&self) -> &str {
        &self.given_names
    }

    /// Given names as individual words.
    pub fn given_name_parts(&self) -> Vec<&str> {
        self.given_names.split_whitespace().collect()
    }

    /// Document number exactly as on the line (9 characters, filler-padded).
    pub fn document_number(&self) -> &str {
        &self.document_number
    }

    /// Document number with fillers removed.
    pub fn document_number_clean(&self) -> String {
        strip_fillers(&self.document_number)
    }

    pub fn document_number_check(&self) -> char {
        self.document_number_check
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    /// Birth date as `YYMMDD`.
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn birth_date_check(&self) -> char {
        self.birth_date_check
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Expiry date as `YYMMDD`.
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    pub fn expiry_date_check(&self) -> char {
        self.expiry_date_check
    }

    /// Personal number exactly as on the line (14 characters, filler-padded).
    pub fn personal_number(&self) -> &str {
        &self.personal_number
    }

    /// Personal number with fillers removed; empty when not issued.
    pub fn personal_number_clean(&self) -> String {
        strip_fillers(&self.personal_number)
    }

    pub fn personal_number_check(&self) -> char {
        self.personal_number_check
    }

    /// Composite check digit over line 2's checked fields.
    pub fn composite_check(&self) -> char {
        self.composite_check
    }

    /// The normalized lines this record was decoded from, if any.
    pub fn source(&self) -> Option<&MrzLines> {
        self.source.as_ref()
    }
}

/// Builder for [`MrzRecord`]. Every field except `source` is required.
#[derive(Debug, Clone, Default)]
pub struct MrzRecordBuilder {
    document_type: Option<String>,
    issuing_country: Option<String>,
    surname: Option<String>,
    given_names: Option<String>,
    document_number: Option<String>,
    document_number_check: Option<char>,
    nationality: Option<String>,
    birth_date: Option<String>,
    birth_date_check: Option<char>,
    sex: Option<Sex>,
    expiry_date: Option<String>,
    expiry_date_check: Option<char>,
    personal_number: Option<String>,
    personal_number_check: Option<char>,
    composite_check: Option<char>,
    source: Option<MrzLines>,
}

macro_rules! builder_setters {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<$ty>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(MrzError::MissingField { field })
}

impl MrzRecordBuilder {
    builder_setters!(
        document_type: String,
        issuing_country: String,
        surname: String,
        given_names: String,
        document_number: String,
        document_number_check: char,
        nationality: String,
        birth_date: String,
        birth_date_check: char,
        sex: Sex,
        expiry_date: String,
        expiry_date_check: char,
        personal_number: String,
        personal_number_check: char,
        composite_check: char,
        source: MrzLines,
    );

    /// Produce the record.
    ///
    /// # Errors
    ///
    /// Returns [`MrzError::MissingField`] naming the first absent field.
    pub fn build(self) -> Result<MrzRecord> {
        Ok(MrzRecord {
            document_type: require(self.document_type, "document_type")?,
            issuing_country: require(self.issuing_country, "issuing_country")?,
            surname: require(self.surname, "surname")?,
            given_names: require(self.given_names, "given_names")?,
            document_number: require(self.document_number, "document_number")?,
            document_number_check: require(self.document_number_check, "document_number_check")?,
            nationality: require(self.nationality, "nationality")?,
            birth_date: require(self.birth_date, "birth_date")?,
            birth_date_check: require(self.birth_date_check, "birth_date_check")?,
            sex: require(self.sex, "sex")?,
            expiry_date: require(self.expiry_date, "expiry_date")?,
            expiry_date_check: require(self.expiry_date_check, "expiry_date_check")?,
            personal_number: require(self.personal_number, "personal_number")?,
            personal_number_check: require(self.personal_number_check, "personal_number_check")?,
            composite_check: require(self.composite_check, "composite_check")?,
            source: self.source,
        })
    }
}

#[derive(Deserialize)]
struct RecordRepr {
    document_type: Option<String>,
    issuing_country: Option<String>,
    surname: Option<String>,
    given_names: Option<String>,
    document_number: Option<String>,
    document_number_check: Option<char>,
    nationality: Option<String>,
    birth_date: Option<String>,
    birth_date_check: Option<char>,
    sex: Option<Sex>,
    expiry_date: Option<String>,
    expiry_date_check: Option<char>,
    personal_number: Option<String>,
    personal_number_check: Option<char>,
    composite_check: Option<char>,
    source: Option<MrzLines>,
}

impl TryFrom<RecordRepr> for MrzRecord {
    type Error = MrzError;

    fn try_from(repr: RecordRepr) -> Result<Self> {
        MrzRecordBuilder {
            document_type: repr.document_type,
            issuing_country: repr.issuing_country,
            surname: repr.surname,
            given_names: repr.given_names,
            document_number: repr.document_number,
            document_number_check: repr.document_number_check,
            nationality: repr.nationality,
            birth_date: repr.birth_date,
            birth_date_check: repr.birth_date_check,
            sex: repr.sex,
            expiry_date: repr.expiry_date,
            expiry_date_check: repr.expiry_date_check,
            personal_number: repr.personal_number,
            personal_number_check: repr.personal_number_check,
            composite_check: repr.composite_check,
            source: repr.source,
        }
        .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_builder() -> MrzRecordBuilder {
        MrzRecord::builder()
            .document_type("P")
            .issuing_country("UTO")
            .surname("ERIKSSON")
            .given_names("ANNA MARIA")
            .document_number("L898902C3")
            .document_number_check('6')
            .nationality("UTO")
            .birth_date("740812")
            .birth_date_check('2')
            .sex(Sex::Female)
            .expiry_date("120415")
            .expiry_date_check('9')
            .personal_number("ZE184226B<<<<<")
            .personal_number_check('1')
            .composite_check('0')
    }

    // -- Sex --

    #[test]
    fn sex_parse_accepts_encodable_values() {
        assert_eq!(Sex::parse("M").unwrap(), Sex::Male);
        assert_eq!(Sex::parse("f").unwrap(), Sex::Female);
        assert_eq!(Sex::parse("x").unwrap(), Sex::Unspecified);
        assert_eq!(Sex::parse("<").unwrap(), Sex::NotStated);
    }

    #[test]
    fn sex_parse_rejects_other_codes() {
        let err = Sex::parse("Q").unwrap_err();
        assert_eq!(err.to_string(), "sex must be one of M/F/X/<, got 'Q'");
        assert!(Sex::parse("MALE").is_err());
    }

    #[test]
    fn sex_from_mrz_char_preserves_unusual_codes() {
        assert_eq!(Sex::from_mrz_char('Z'), Sex::Other('Z'));
        assert_eq!(Sex::from_mrz_char('Z').as_char(), 'Z');
        assert_eq!(Sex::from_mrz_char('<'), Sex::NotStated);
    }

    // -- Builder --

    #[test]
    fn builder_produces_record() {
        let record = sample_builder().build().unwrap();
        assert_eq!(record.surname(), "ERIKSSON");
        assert_eq!(record.given_name_parts(), vec!["ANNA", "MARIA"]);
        assert_eq!(record.personal_number_clean(), "ZE184226B");
        assert_eq!(record.document_number_clean(), "L898902C3");
        assert!(record.source().is_none());
    }

    #[test]
    fn builder_reports_missing_field() {
        let err = MrzRecord::builder()
            .document_type("P")
            .issuing_country("UTO")
            .build()
            .unwrap_err();
        assert_eq!(err, MrzError::MissingField { field: "surname" });
    }

    #[test]
    fn builder_reports_missing_check_digit() {
        let mut builder = sample_builder();
        builder.composite_check = None;
        assert_eq!(
            builder.build().unwrap_err(),
            MrzError::MissingField { field: "composite_check" }
        );
    }

    // -- Serde --

    #[test]
    fn record_serde_roundtrip() {
        let record = sample_builder().build().unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""sex":"F""#));
        let back: MrzRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn record_deserialize_requires_fields() {
        let err = serde_json::from_str::<MrzRecord>(r#"{"document_type":"P"}"#).unwrap_err();
        assert!(err.to_string().contains("missing required field: issuing_country"));
    }
}
