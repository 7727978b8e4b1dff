//! # mrz-core — ICAO 9303 TD-3 Machine Readable Zone Codec
//!
//! Turns raw two-line passport MRZ text into structured fields, turns
//! structured travel-document data into MRZ text, and judges data integrity
//! through the embedded check digits.
//!
//! ## Key Design Principles
//!
//! 1. **Validated wire form.** [`MrzLines`] can only be constructed through
//!    normalization and length checks. Holding one means both lines are 44
//!    characters over `A-Z`, `0-9`, `<`.
//!
//! 2. **Typed records with builders.** [`MrzRecord`] and [`TravelDocument`]
//!    are plain structs built through builders that refuse absent fields.
//!    Deserialization routes through the same builders.
//!
//! 3. **Check digits are derived, never trusted.** Decoding keeps the stored
//!    characters; [`validate_check_digits`] recomputes and compares.
//!
//! 4. **One error enum.** Every failure is an [`MrzError`] variant whose
//!    message names the field and the violation.
//!
//! ## Crate Policy
//!
//! - No I/O, no global state; every operation is a pure function of its
//!   arguments and safe to call concurrently.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//!
//! ## Example
//!
//! ```
//! use mrz_core::{decode, encode, validate_check_digits, TravelDocument};
//!
//! let doc = TravelDocument::builder()
//!     .document_type("P")
//!     .country_code("UTO")
//!     .surname("Eriksson")
//!     .given_names(["Anna", "Maria"])
//!     .document_number("L898902C3")
//!     .nationality("UTO")
//!     .birth_date("740812")
//!     .sex("F")
//!     .expiry_date("120415")
//!     .personal_number("ZE184226B")
//!     .build()?;
//!
//! let lines = encode(&doc)?;
//! assert_eq!(lines.line2(), "L898902C36UTO7408122F1204159ZE184226B<<<<<10");
//!
//! let record = decode(lines.line1(), lines.line2())?;
//! assert!(validate_check_digits(&record)?.is_valid());
//! # Ok::<(), mrz_core::MrzError>(())
//! ```

pub mod charset;
pub mod check_digit;
pub mod config;
pub mod decode;
pub mod document;
pub mod encode;
pub mod error;
pub mod layout;
pub mod lines;
pub mod record;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use check_digit::{check_digit_char, compute_check_digit};
pub use config::CodecConfig;
pub use decode::{decode, decode_lines, decode_optional};
pub use document::{TravelDocument, TravelDocumentBuilder};
pub use encode::{encode, Encoder};
pub use error::{ConfigError, MrzError};
pub use lines::MrzLines;
pub use record::{MrzRecord, MrzRecordBuilder, Sex};
pub use validate::{validate_check_digits, CheckDigitMismatch, CheckDigitReport, CheckedField};
