//! # Character and Field Utilities
//!
//! Helpers shared by the encoder and the decoder: the MRZ alphabet, the
//! character-to-value mapping used by check digits, line normalization,
//! filler padding and stripping, and name-field formatting.
//!
//! ## Alphabet
//!
//! The MRZ alphabet is `A-Z`, `0-9` and the filler `<`. Everything these
//! helpers return is restricted to it.

use crate::error::{MrzError, Result};

/// The MRZ filler character.
pub const FILLER: char = '<';

/// Separator between surname and given names in the name field.
pub const NAME_SEPARATOR: &str = "<<";

/// Whether `c` belongs to the MRZ alphabet.
pub fn is_mrz_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == FILLER
}

/// Numeric value of an MRZ character for check-digit computation.
///
/// `0-9` map to 0-9, `A-Z` to 10-35 and `<` to 0. Returns `None` for
/// characters outside the alphabet (including lowercase letters).
pub fn char_value(c: char) -> Option<u32> {
    match c {
        FILLER => Some(0),
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Uppercase a raw line, turn spaces into fillers and check the alphabet.
///
/// # Errors
///
/// Returns [`MrzError::InvalidCharacter`] with the 1-based position of the
/// first character outside the alphabet.
pub fn normalize_line(field: &'static str, line: &str) -> Result<String> {
    line.chars()
        .enumerate()
        .map(|(i, c)| {
            let c = if c == ' ' { FILLER } else { c.to_ascii_uppercase() };
            if is_mrz_char(c) {
                Ok(c)
            } else {
                Err(MrzError::InvalidCharacter {
                    field,
                    character: c,
                    position: i + 1,
                })
            }
        })
        .collect()
}

/// [`normalize_line`] for inputs that may be absent.
///
/// # Errors
///
/// Returns [`MrzError::InvalidInput`] when `line` is `None`.
pub fn normalize_optional_line(field: &'static str, line: Option<&str>) -> Result<String> {
    let line = line.ok_or_else(|| MrzError::InvalidInput {
        reason: format!("{field} is absent"),
    })?;
    normalize_line(field, line)
}

/// Remove leading and trailing fillers; interior filler runs become one space.
///
/// `"<<ANNA<<<MARIA<<"` becomes `"ANNA MARIA"`. An all-filler value becomes
/// the empty string.
pub fn strip_fillers(value: &str) -> String {
    value
        .split(FILLER)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Right-pad `value` with fillers to exactly `length` characters.
///
/// Longer values are truncated to `length` without error.
pub fn pad_field(value: &str, length: usize) -> String {
    let mut out: String = value.chars().take(length).collect();
    let used = out.chars().count();
    out.extend(std::iter::repeat(FILLER).take(length - used));
    out
}

/// Permitted character classes for individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `A-Z` and `<` (names, sex).
    LettersAndFiller,
    /// `A-Z`, `0-9` and `<` (document numbers, personal numbers, codes).
    AlphanumericAndFiller,
}

impl CharClass {
    /// Whether `c` is admitted by this class.
    pub fn admits(self, c: char) -> bool {
        match self {
            Self::LettersAndFiller => c.is_ascii_uppercase() || c == FILLER,
            Self::AlphanumericAndFiller => is_mrz_char(c),
        }
    }
}

/// Check every character of an already-uppercased `value` against `class`.
///
/// # Errors
///
/// Returns [`MrzError::InvalidCharacter`] naming `field`, the offending
/// character and its 1-based position.
pub fn validate_charset(field: &'static str, value: &str, class: CharClass) -> Result<()> {
    match value.chars().enumerate().find(|(_, c)| !class.admits(*c)) {
        Some((i, character)) => Err(MrzError::InvalidCharacter {
            field,
            character,
            position: i + 1,
        }),
        None => Ok(()),
    }
}

/// Convert a natural-form name into MRZ words joined by single fillers.
///
/// Letters are uppercased. Whitespace, hyphens and fillers separate words;
/// apostrophes and periods are dropped. Anything else is rejected.
fn name_component(field: &'static str, raw: &str) -> Result<String> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for (i, c) in raw.chars().enumerate() {
        match c {
            c if c.is_ascii_alphabetic() => current.push(c.to_ascii_uppercase()),
            c if c.is_whitespace() || c == '-' || c == FILLER => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            '\'' | '.' => {}
            character => {
                return Err(MrzError::InvalidCharacter {
                    field,
                    character,
                    position: i + 1,
                })
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    Ok(words.join("<"))
}

/// Build the TD-3 name field: `SURNAME<<GIVEN<NAMES`, padded or truncated to
/// `max_length`.
///
/// Each entry of `given_names` may itself hold several space-separated
/// names. Over-long names are truncated, never rejected.
///
/// # Errors
///
/// - [`MrzError::InvalidCharacter`] if a name holds a character that has
///   no MRZ representation (digits, symbols, non-ASCII letters).
/// - [`MrzError::MissingField`] if the surname, or every given name, is
///   left empty once punctuation is dropped.
pub fn format_name_field<S: AsRef<str>>(
    surname: &str,
    given_names: &[S],
    max_length: usize,
) -> Result<String> {
    let surname = name_component("surname", surname)?;
    if surname.is_empty() {
        return Err(MrzError::MissingField { field: "surname" });
    }
    let given = given_names
        .iter()
        .map(|name| name_component("given_names", name.as_ref()))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join("<");
    if given.is_empty() {
        return Err(MrzError::MissingField {
            field: "given_names",
        });
    }

    let combined = format!("{surname}{NAME_SEPARATOR}{given}");
    validate_charset("name", &combined, CharClass::LettersAndFiller)?;
    Ok(pad_field(&combined, max_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- char_value --

    #[test]
    fn char_value_filler_is_zero() {
        assert_eq!(char_value('<'), Some(0));
    }

    #[test]
    fn char_value_digits() {
        assert_eq!(char_value('0'), Some(0));
        assert_eq!(char_value('5'), Some(5));
        assert_eq!(char_value('9'), Some(9));
    }

    #[test]
    fn char_value_letters() {
        assert_eq!(char_value('A'), Some(10));
        assert_eq!(char_value('B'), Some(11));
        assert_eq!(char_value('M'), Some(22));
        assert_eq!(char_value('Z'), Some(35));
    }

    #[test]
    fn char_value_rejects_outside_alphabet() {
        assert_eq!(char_value('a'), None);
        assert_eq!(char_value(' '), None);
        assert_eq!(char_value('#'), None);
        assert_eq!(char_value('É'), None);
    }

    // -- normalize_line --

    #[test]
    fn normalize_uppercases() {
        assert_eq!(normalize_line("line1", "abc123").unwrap(), "ABC123");
    }

    #[test]
    fn normalize_spaces_become_fillers() {
        assert_eq!(normalize_line("line1", "AB CD EF").unwrap(), "AB<CD<EF");
    }

    #[test]
    fn normalize_keeps_valid_line() {
        let line = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
        assert_eq!(normalize_line("line1", line).unwrap(), line);
    }

    #[test]
    fn normalize_reports_invalid_character_position() {
        let err = normalize_line("line2", "ABC#DEF").unwrap_err();
        assert_eq!(
            err,
            MrzError::InvalidCharacter {
                field: "line2",
                character: '#',
                position: 4,
            }
        );
    }

    #[test]
    fn normalize_rejects_non_ascii() {
        assert!(matches!(
            normalize_line("line1", "MÜLLER"),
            Err(MrzError::InvalidCharacter { position: 2, .. })
        ));
    }

    #[test]
    fn normalize_optional_absent_is_invalid_input() {
        assert!(matches!(
            normalize_optional_line("line1", None),
            Err(MrzError::InvalidInput { .. })
        ));
        assert_eq!(normalize_optional_line("line1", Some("a b")).unwrap(), "A<B");
    }

    // -- strip_fillers --

    #[test]
    fn strip_fillers_trims_both_ends() {
        assert_eq!(strip_fillers("<<ABC<<"), "ABC");
    }

    #[test]
    fn strip_fillers_interior_runs_become_single_space() {
        assert_eq!(strip_fillers("ANNA<MARIA<<<"), "ANNA MARIA");
        assert_eq!(strip_fillers("ANNA<<<MARIA"), "ANNA MARIA");
    }

    #[test]
    fn strip_fillers_all_filler_is_empty() {
        assert_eq!(strip_fillers("<<<<<<"), "");
        assert_eq!(strip_fillers(""), "");
    }

    #[test]
    fn strip_fillers_without_fillers_is_unchanged() {
        assert_eq!(strip_fillers("L898902C3"), "L898902C3");
    }

    // -- pad_field --

    #[test]
    fn pad_field_pads_right() {
        assert_eq!(pad_field("ABC", 6), "ABC<<<");
    }

    #[test]
    fn pad_field_truncates_silently() {
        assert_eq!(pad_field("ABCDEFGHIJ", 4), "ABCD");
    }

    #[test]
    fn pad_field_exact_length_unchanged() {
        assert_eq!(pad_field("ABCD", 4), "ABCD");
    }

    #[test]
    fn pad_field_empty_is_all_filler() {
        assert_eq!(pad_field("", 5), "<<<<<");
    }

    // -- validate_charset --

    #[test]
    fn letters_class_rejects_digits() {
        let err = validate_charset("sex", "M1", CharClass::LettersAndFiller).unwrap_err();
        assert_eq!(
            err,
            MrzError::InvalidCharacter {
                field: "sex",
                character: '1',
                position: 2,
            }
        );
    }

    #[test]
    fn alphanumeric_class_accepts_codes() {
        assert!(validate_charset("document_number", "L898902C3", CharClass::AlphanumericAndFiller).is_ok());
        assert!(validate_charset("document_number", "AB<12", CharClass::AlphanumericAndFiller).is_ok());
        assert!(validate_charset("document_number", "AB-12", CharClass::AlphanumericAndFiller).is_err());
    }

    // -- format_name_field --

    #[test]
    fn name_field_single_given_name() {
        let field = format_name_field("Doe", &["John"], 30).unwrap();
        assert_eq!(field, format!("DOE<<JOHN{}", "<".repeat(21)));
        assert_eq!(field.len(), 30);
    }

    #[test]
    fn name_field_multiple_given_names() {
        let field = format_name_field("ERIKSSON", &["ANNA", "MARIA"], 39).unwrap();
        assert_eq!(field, format!("ERIKSSON<<ANNA<MARIA{}", "<".repeat(19)));
    }

    #[test]
    fn name_field_space_separated_given_names() {
        let field = format_name_field("doe", &["john michael"], 30).unwrap();
        assert!(field.starts_with("DOE<<JOHN<MICHAEL<"));
    }

    #[test]
    fn name_field_truncates_long_surname() {
        let field = format_name_field(&"A".repeat(40), &["B"], 30).unwrap();
        assert_eq!(field, "A".repeat(30));
    }

    #[test]
    fn name_field_hyphen_and_apostrophe() {
        let field = format_name_field("O'Brien-Smith", &["Mary-Jo"], 30).unwrap();
        assert!(field.starts_with("OBRIEN<SMITH<<MARY<JO<"));
    }

    #[test]
    fn name_field_without_given_names() {
        assert_eq!(
            format_name_field::<&str>("DOE", &[], 10),
            Err(MrzError::MissingField { field: "given_names" })
        );
    }

    #[test]
    fn name_field_punctuation_only_surname() {
        assert_eq!(
            format_name_field("'", &["JOHN"], 30),
            Err(MrzError::MissingField { field: "surname" })
        );
        assert_eq!(
            format_name_field(" - ", &["JOHN"], 30),
            Err(MrzError::MissingField { field: "surname" })
        );
    }

    #[test]
    fn name_field_punctuation_only_given_names() {
        assert_eq!(
            format_name_field("DOE", &[".", "'"], 30),
            Err(MrzError::MissingField { field: "given_names" })
        );
    }

    #[test]
    fn name_field_rejects_digits() {
        assert!(matches!(
            format_name_field("D0E", &["JOHN"], 30),
            Err(MrzError::InvalidCharacter { field: "surname", character: '0', position: 2 })
        ));
    }
}
