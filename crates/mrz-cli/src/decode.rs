//! # Decode CLI — MRZ lines to structured fields.
//!
//! Decoding does not judge check digits; use `mrz validate` for that.

use anyhow::Result;
use clap::Args;

use crate::output::{render_record, to_json};
use crate::{CliContext, LinesArgs};

/// Decode subcommand arguments.
#[derive(Args, Debug, Clone, Default)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub lines: LinesArgs,
}

/// Execute the decode subcommand.
pub fn run_decode(args: &DecodeArgs, ctx: &CliContext) -> Result<u8> {
    let record = args.lines.record()?;
    if ctx.json {
        println!("{}", to_json(&record)?);
    } else {
        println!("{}", render_record(&record));
    }
    Ok(0)
}
