//! # Travel Document Data
//!
//! [`TravelDocument`] is the encoder input: the logical fields of a
//! passport in natural form (unpadded, any case). Check digits are never
//! supplied; the encoder computes them.
//!
//! The builder enforces presence: every required field must be set to a
//! non-blank value and at least one given name must be present. Shape
//! checks (lengths, digits, sex codes) belong to the encoder, so a document
//! with `sex = "Q"` can be built and is rejected by
//! [`encode`](crate::encode::encode).

use serde::{Deserialize, Serialize};

use crate::error::{MrzError, Result};

/// Travel document data ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DocumentRepr")]
pub struct TravelDocument {
    document_type: String,
    country_code: String,
    surname: String,
    given_names: Vec<String>,
    document_number: String,
    nationality: String,
    birth_date: String,
    sex: String,
    expiry_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    personal_number: Option<String>,
}

impl TravelDocument {
    /// Start building a travel document.
    pub fn builder() -> TravelDocumentBuilder {
        TravelDocumentBuilder::default()
    }

    /// Document type, 1-2 characters (e.g. `P`, `PO`).
    pub fn document_type(&self) -> &str {
        &self.document_type
    }

    /// Issuing state or organization.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Given names in order; never empty.
    pub fn given_names(&self) -> &[String] {
        &self.given_names
    }

    pub fn document_number(&self) -> &str {
        &self.document_number
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    /// Birth date as supplied, expected `YYMMDD`.
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    /// Sex as supplied, expected one of `M`, `F`, `X`, `<`.
    pub fn sex(&self) -> &str {
        &self.sex
    }

    /// Expiry date as supplied, expected `YYMMDD`.
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    pub fn personal_number(&self) -> Option<&str> {
        self.personal_number.as_deref()
    }
}

/// Builder for [`TravelDocument`].
#[derive(Debug, Clone, Default)]
pub struct TravelDocumentBuilder {
    document_type: Option<String>,
    country_code: Option<String>,
    surname: Option<String>,
    given_names: Vec<String>,
    document_number: Option<String>,
    nationality: Option<String>,
    birth_date: Option<String>,
    sex: Option<String>,
    expiry_date: Option<String>,
    personal_number: Option<String>,
}

impl TravelDocumentBuilder {
    pub fn document_type(mut self, value: impl Into<String>) -> Self {
        self.document_type = Some(value.into());
        self
    }

    pub fn country_code(mut self, value: impl Into<String>) -> Self {
        self.country_code = Some(value.into());
        self
    }

    pub fn surname(mut self, value: impl Into<String>) -> Self {
        self.surname = Some(value.into());
        self
    }

    /// Append one given name.
    pub fn given_name(mut self, value: impl Into<String>) -> Self {
        self.given_names.push(value.into());
        self
    }

    /// Replace the given names with `names`.
    pub fn given_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.given_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the given names with the whitespace-separated words of `text`.
    pub fn given_names_text(self, text: &str) -> Self {
        self.given_names(text.split_whitespace())
    }

    pub fn document_number(mut self, value: impl Into<String>) -> Self {
        self.document_number = Some(value.into());
        self
    }

    pub fn nationality(mut self, value: impl Into<String>) -> Self {
        self.nationality = Some(value.into());
        self
    }

    pub fn birth_date(mut self, value: impl Into<String>) -> Self {
        self.birth_date = Some(value.into());
        self
    }

    pub fn sex(mut self, value: impl Into<String>) -> Self {
        self.sex = Some(value.into());
        self
    }

    pub fn expiry_date(mut self, value: impl Into<String>) -> Self {
        self.expiry_date = Some(value.into());
        self
    }

    pub fn personal_number(mut self, value: impl Into<String>) -> Self {
        self.personal_number = Some(value.into());
        self
    }

    /// Produce the document.
    ///
    /// A blank personal number is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`MrzError::MissingField`] naming the first required field
    /// that is absent or blank.
    pub fn build(self) -> Result<TravelDocument> {
        let given_names: Vec<String> = self
            .given_names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        let document = TravelDocument {
            document_type: required(self.document_type, "document_type")?,
            country_code: required(self.country_code, "country_code")?,
            surname: required(self.surname, "surname")?,
            given_names,
            document_number: required(self.document_number, "document_number")?,
            nationality: required(self.nationality, "nationality")?,
            birth_date: required(self.birth_date, "birth_date")?,
            sex: required(self.sex, "sex")?,
            expiry_date: required(self.expiry_date, "expiry_date")?,
            personal_number: self
                .personal_number
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        };
        if document.given_names.is_empty() {
            return Err(MrzError::MissingField {
                field: "given_names",
            });
        }
        Ok(document)
    }
}

/// Trimmed value of a required field; blank counts as absent.
fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(MrzError::MissingField { field }),
    }
}

/// Given names arrive either as a list or as one space-separated string.
#[derive(Deserialize)]
#[serde(untagged)]
enum GivenNamesRepr {
    Text(String),
    List(Vec<String>),
}

#[derive(Deserialize)]
struct DocumentRepr {
    document_type: Option<String>,
    country_code: Option<String>,
    surname: Option<String>,
    given_names: Option<GivenNamesRepr>,
    document_number: Option<String>,
    nationality: Option<String>,
    birth_date: Option<String>,
    sex: Option<String>,
    expiry_date: Option<String>,
    personal_number: Option<String>,
}

impl TryFrom<DocumentRepr> for TravelDocument {
    type Error = MrzError;

    fn try_from(repr: DocumentRepr) -> Result<Self> {
        let mut builder = TravelDocumentBuilder {
            document_type: repr.document_type,
            country_code: repr.country_code,
            surname: repr.surname,
            given_names: Vec::new(),
            document_number: repr.document_number,
            nationality: repr.nationality,
            birth_date: repr.birth_date,
            sex: repr.sex,
            expiry_date: repr.expiry_date,
            personal_number: repr.personal_number,
        };
        builder = match repr.given_names {
            Some(GivenNamesRepr::Text(text)) => builder.given_names_text(&text),
            Some(GivenNamesRepr::List(names)) => builder.given_names(names),
            None => builder,
        };
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doe() -> TravelDocumentBuilder {
        TravelDocument::builder()
            .document_type("P")
            .country_code("USA")
            .surname("DOE")
            .given_names_text("JOHN MICHAEL")
            .document_number("123456789")
            .nationality("USA")
            .birth_date("900101")
            .sex("M")
            .expiry_date("300101")
    }

    #[test]
    fn builds_with_required_fields() {
        let doc = doe().build().unwrap();
        assert_eq!(doc.given_names(), ["JOHN", "MICHAEL"]);
        assert_eq!(doc.personal_number(), None);
    }

    #[test]
    fn missing_surname_is_rejected() {
        let err = TravelDocument::builder()
            .document_type("P")
            .country_code("USA")
            .given_name("JOHN")
            .build()
            .unwrap_err();
        assert_eq!(err, MrzError::MissingField { field: "surname" });
    }

    #[test]
    fn blank_surname_is_rejected() {
        let err = doe().surname("   ").build().unwrap_err();
        assert_eq!(err, MrzError::MissingField { field: "surname" });
    }

    #[test]
    fn blank_given_names_are_rejected() {
        let err = doe().given_names([" ", ""]).build().unwrap_err();
        assert_eq!(err, MrzError::MissingField { field: "given_names" });
    }

    #[test]
    fn blank_personal_number_is_absent() {
        let doc = doe().personal_number("  ").build().unwrap();
        assert_eq!(doc.personal_number(), None);
    }

    #[test]
    fn deserializes_text_given_names() {
        let json = r#"{
            "document_type": "P", "country_code": "USA", "surname": "DOE",
            "given_names": "JOHN MICHAEL", "document_number": "123456789",
            "nationality": "USA", "birth_date": "900101", "sex": "M",
            "expiry_date": "300101", "personal_number": "987654321"
        }"#;
        let doc: TravelDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.given_names(), ["JOHN", "MICHAEL"]);
        assert_eq!(doc.personal_number(), Some("987654321"));
    }

    #[test]
    fn deserializes_list_given_names() {
        let json = r#"{
            "document_type": "P", "country_code": "UTO", "surname": "ERIKSSON",
            "given_names": ["ANNA", "MARIA"], "document_number": "L898902C3",
            "nationality": "UTO", "birth_date": "740812", "sex": "F",
            "expiry_date": "120415"
        }"#;
        let doc: TravelDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.given_names(), ["ANNA", "MARIA"]);
    }

    #[test]
    fn deserialize_null_surname_is_missing_field() {
        let json = r#"{
            "document_type": "P", "country_code": "USA", "surname": null,
            "given_names": "JOHN", "document_number": "1", "nationality": "USA",
            "birth_date": "900101", "sex": "M", "expiry_date": "300101"
        }"#;
        let err = serde_json::from_str::<TravelDocument>(json).unwrap_err();
        assert!(err.to_string().contains("missing required field: surname"));
    }
}
