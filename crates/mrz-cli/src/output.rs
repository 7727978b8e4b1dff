//! Text and JSON rendering shared by the subcommands.

use anyhow::{Context, Result};
use serde::Serialize;

use mrz_core::{CheckDigitReport, MrzLines, MrzRecord, TravelDocument};

/// Pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

/// Both lines, one per row.
pub fn render_lines(lines: &MrzLines) -> String {
    format!("{}\n{}", lines.line1(), lines.line2())
}

pub fn render_record(record: &MrzRecord) -> String {
    let personal = record.personal_number_clean();
    let rows = [
        ("Document type", record.document_type().to_string()),
        ("Issuing country", record.issuing_country().to_string()),
        ("Surname", record.surname().to_string()),
        ("Given names", record.given_names().to_string()),
        ("Document number", record.document_number_clean()),
        ("Nationality", record.nationality().to_string()),
        ("Birth date", record.birth_date().to_string()),
        ("Sex", record.sex().to_string()),
        ("Expiry date", record.expiry_date().to_string()),
        (
            "Personal number",
            if personal.is_empty() { "-".to_string() } else { personal },
        ),
    ];
    table(&rows)
}

pub fn render_document(document: &TravelDocument) -> String {
    let rows = [
        ("Document type", document.document_type().to_string()),
        ("Issuing country", document.country_code().to_string()),
        ("Surname", document.surname().to_string()),
        ("Given names", document.given_names().join(" ")),
        ("Document number", document.document_number().to_string()),
        ("Nationality", document.nationality().to_string()),
        ("Birth date", document.birth_date().to_string()),
        ("Sex", document.sex().to_string()),
        ("Expiry date", document.expiry_date().to_string()),
        (
            "Personal number",
            document.personal_number().unwrap_or("-").to_string(),
        ),
    ];
    table(&rows)
}

/// `VALID`, or `INVALID` followed by one line per mismatch.
pub fn render_report(report: &CheckDigitReport) -> String {
    if report.is_valid() {
        return "VALID: all check digits match".to_string();
    }
    std::iter::once(format!(
        "INVALID: {} check digit(s) failed",
        report.errors().len()
    ))
    .chain(report.errors().iter().map(|mismatch| format!("  - {mismatch}")))
    .collect::<Vec<_>>()
    .join("\n")
}

fn table(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$}  {value}", format!("{label}:"), width = width + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
