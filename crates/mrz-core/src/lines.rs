//! # MRZ Line Pair
//!
//! [`MrzLines`] is the wire form of a TD-3 zone: two lines of exactly 44
//! characters over `A-Z`, `0-9` and `<`. The only constructors normalize
//! and validate, so holding an `MrzLines` means both invariants hold.

use serde::{Deserialize, Serialize};

use crate::charset::normalize_line;
use crate::error::{MrzError, Result};
use crate::layout::LINE_LENGTH;

/// A validated pair of TD-3 lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLines")]
pub struct MrzLines {
    line1: String,
    line2: String,
}

#[derive(Deserialize)]
struct RawLines {
    line1: String,
    line2: String,
}

impl TryFrom<RawLines> for MrzLines {
    type Error = MrzError;

    fn try_from(raw: RawLines) -> Result<Self> {
        Self::new(&raw.line1, &raw.line2)
    }
}

impl MrzLines {
    /// Normalize both lines (uppercase, space to filler) and check their
    /// alphabet and length.
    ///
    /// # Errors
    ///
    /// - [`MrzError::InvalidCharacter`] for characters outside the alphabet.
    /// - [`MrzError::InvalidLength`] if either line is not 44 characters
    ///   after normalization.
    pub fn new(line1: &str, line2: &str) -> Result<Self> {
        let line1 = normalize_line("line1", line1)?;
        let line2 = normalize_line("line2", line2)?;
        ensure_line_length("line1", &line1)?;
        ensure_line_length("line2", &line2)?;
        Ok(Self { line1, line2 })
    }

    /// Parse a two-line text block, as printed on the document or read back
    /// from a scanner. Surrounding whitespace and blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MrzError::InvalidInput`] unless the block holds exactly two
    /// non-blank lines, then the errors of [`MrzLines::new`].
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        match lines.as_slice() {
            [line1, line2] => Self::new(line1, line2),
            other => Err(MrzError::InvalidInput {
                reason: format!("expected 2 MRZ lines, found {}", other.len()),
            }),
        }
    }

    /// Build from lines the caller has already assembled from valid fields.
    pub(crate) fn from_assembled(line1: String, line2: String) -> Result<Self> {
        Self::new(&line1, &line2)
    }

    /// The first line (document type, issuing state, names).
    pub fn line1(&self) -> &str {
        &self.line1
    }

    /// The second line (numbers, dates, sex, check digits).
    pub fn line2(&self) -> &str {
        &self.line2
    }

    /// Consume into the two owned lines.
    pub fn into_parts(self) -> (String, String) {
        (self.line1, self.line2)
    }
}

impl std::fmt::Display for MrzLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.line1, self.line2)
    }
}

fn ensure_line_length(field: &'static str, line: &str) -> Result<()> {
    let actual = line.chars().count();
    if actual != LINE_LENGTH {
        return Err(MrzError::InvalidLength {
            field,
            expected: LINE_LENGTH,
            actual,
        });
    }
    Ok(())
}
