//! # ICAO 9303 Check Digits
//!
//! Weighted-sum modulo-10 check digit over an arbitrary-length field. Each
//! character is mapped through [`char_value`], multiplied by the repeating
//! weight cycle `7, 3, 1`, and the sum is reduced modulo 10.

use crate::charset::char_value;
use crate::error::{MrzError, Result};

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Compute the check digit of `field`.
///
/// The empty field yields 0, as does any all-filler field.
///
/// # Errors
///
/// Returns [`MrzError::InvalidCharacter`] if `field` holds a character
/// outside the MRZ alphabet. Normalized lines never do.
pub fn compute_check_digit(field: &str) -> Result<u8> {
    let mut total: u32 = 0;
    for (i, c) in field.chars().enumerate() {
        let value = char_value(c).ok_or(MrzError::InvalidCharacter {
            field: "check digit input",
            character: c,
            position: i + 1,
        })?;
        total += value * WEIGHTS[i % WEIGHTS.len()];
    }
    // total % 10 always fits in a u8
    Ok((total % 10) as u8)
}

/// [`compute_check_digit`] rendered as the ASCII digit written on the line.
pub fn check_digit_char(field: &str) -> Result<char> {
    let digit = compute_check_digit(field)?;
    Ok(char::from(b'0' + digit))
}
