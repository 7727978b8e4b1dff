//! # mrz CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mrz_cli::decode::{run_decode, DecodeArgs};
use mrz_cli::encode::{run_encode, EncodeArgs};
use mrz_cli::lookup::{run_lookup, LookupArgs};
use mrz_cli::scan::{run_scan, ScanArgs};
use mrz_cli::validate::{run_validate, ValidateArgs};
use mrz_cli::{resolve_config, CliContext};

/// ICAO 9303 TD-3 machine readable zone tool.
///
/// Encodes travel-document data into the two 44-character MRZ lines of a
/// passport, decodes MRZ lines back into fields, and verifies check digits.
#[derive(Parser, Debug)]
#[command(name = "mrz", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Width filled by the name formatter before padding (1-39).
    /// Overrides MRZ_NAME_FIELD_LENGTH.
    #[arg(long, global = true)]
    name_field_length: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode travel-document data into MRZ lines.
    Encode(EncodeArgs),

    /// Decode MRZ lines into structured fields.
    Decode(DecodeArgs),

    /// Verify the check digits of MRZ lines.
    Validate(ValidateArgs),

    /// Look up a stored document and print its MRZ.
    Lookup(LookupArgs),

    /// Read MRZ lines from the scanner and verify them.
    Scan(ScanArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "mrz CLI starting");

    let config = match resolve_config(cli.name_field_length) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };
    let ctx = CliContext {
        json: cli.json,
        config,
    };

    let result = match &cli.command {
        Commands::Encode(args) => run_encode(args, &ctx),
        Commands::Decode(args) => run_decode(args, &ctx),
        Commands::Validate(args) => run_validate(args, &ctx),
        Commands::Lookup(args) => run_lookup(args, &ctx),
        Commands::Scan(args) => run_scan(args, &ctx),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
