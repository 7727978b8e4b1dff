//! # mrz-cli — Command-Line Front End for the MRZ Codec
//!
//! Provides the `mrz` binary.
//!
//! ## Subcommands
//!
//! - `mrz encode` — Travel-document data (JSON file or flags) to MRZ lines.
//! - `mrz decode` — MRZ lines (arguments or file) to structured fields.
//! - `mrz validate` — Check-digit verification; exits 2 on mismatch.
//! - `mrz lookup` — Fetch a document from the store and encode it.
//! - `mrz scan` — Read from the scanner, decode, and validate.
//!
//! ```bash
//! mrz encode --input passport.json
//! mrz decode 'P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<' \
//!            'L898902C36UTO7408122F1204159ZE184226B<<<<<10'
//! mrz --json validate --file zone.txt
//! ```
//!
//! Every `run_*` handler returns the process exit code; failures propagate
//! as `anyhow::Error` and are reported by `main`.

pub mod decode;
pub mod encode;
pub mod lookup;
pub mod output;
pub mod scan;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use mrz_core::{decode_lines, decode_optional, CodecConfig, ConfigError, MrzLines, MrzRecord};

/// Exit code for a zone whose check digits do not match.
pub const EXIT_CHECK_DIGIT_MISMATCH: u8 = 2;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliContext {
    /// Emit JSON instead of text.
    pub json: bool,
    pub config: CodecConfig,
}

/// Resolve codec configuration. The command-line value wins over
/// `MRZ_NAME_FIELD_LENGTH`.
pub fn resolve_config(name_field_length: Option<usize>) -> Result<CodecConfig, ConfigError> {
    match name_field_length {
        Some(length) => CodecConfig::with_name_field_length(length),
        None => CodecConfig::from_env(),
    }
}

/// MRZ input given either as two positional lines or as a file.
#[derive(Args, Debug, Clone, Default)]
pub struct LinesArgs {
    /// First MRZ line (44 characters).
    #[arg(conflicts_with = "file")]
    pub line1: Option<String>,

    /// Second MRZ line (44 characters).
    #[arg(conflicts_with = "file")]
    pub line2: Option<String>,

    /// Read both lines from a text file instead.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl LinesArgs {
    /// Decode the zone named by these arguments.
    pub fn record(&self) -> Result<MrzRecord> {
        match &self.file {
            Some(path) => {
                let lines = read_lines_file(path)?;
                decode_lines(&lines).context("failed to decode MRZ")
            }
            None => decode_optional(self.line1.as_deref(), self.line2.as_deref())
                .context("failed to decode MRZ"),
        }
    }
}

/// Read a two-line MRZ text file.
pub fn read_lines_file(path: &Path) -> Result<MrzLines> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read MRZ file: {}", path.display()))?;
    MrzLines::parse(&text).with_context(|| format!("invalid MRZ in {}", path.display()))
}
