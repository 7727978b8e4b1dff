//! # TD-3 Field Layout
//!
//! Fixed character spans of the two 44-character TD-3 lines. Spans are
//! 0-based and end-exclusive; single-character fields are given by index.
//! These offsets are shared by the encoder and the decoder and must match
//! ICAO 9303 Part 4 exactly for interoperability with passport readers.

use std::ops::Range;

/// Width of each TD-3 line.
pub const LINE_LENGTH: usize = 44;

/// Maximum width of the name field on line 1 (after type and country).
pub const NAME_FIELD_CAPACITY: usize = 39;

/// Default width the name formatter fills before padding to capacity.
pub const DEFAULT_NAME_FIELD_LENGTH: usize = 30;

// Line 1
pub const DOCUMENT_TYPE: Range<usize> = 0..2;
pub const ISSUING_COUNTRY: Range<usize> = 2..5;
pub const NAMES: Range<usize> = 5..44;

// Line 2
pub const DOCUMENT_NUMBER: Range<usize> = 0..9;
pub const DOCUMENT_NUMBER_CHECK: usize = 9;
pub const NATIONALITY: Range<usize> = 10..13;
pub const BIRTH_DATE: Range<usize> = 13..19;
pub const BIRTH_DATE_CHECK: usize = 19;
pub const SEX: usize = 20;
pub const EXPIRY_DATE: Range<usize> = 21..27;
pub const EXPIRY_DATE_CHECK: usize = 27;
pub const PERSONAL_NUMBER: Range<usize> = 28..42;
pub const PERSONAL_NUMBER_CHECK: usize = 42;
pub const COMPOSITE_CHECK: usize = 43;

/// Width of a span.
pub const fn width(span: &Range<usize>) -> usize {
    span.end - span.start
}
