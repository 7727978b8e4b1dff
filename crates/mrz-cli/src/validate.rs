//! # Validate CLI — Check-digit verification.
//!
//! Exit codes: `0` when all five check digits match,
//! [`EXIT_CHECK_DIGIT_MISMATCH`] when any differs, `1` on malformed input.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use mrz_core::{validate_check_digits, CheckDigitMismatch, CheckDigitReport};

use crate::output::{render_report, to_json};
use crate::{CliContext, LinesArgs, EXIT_CHECK_DIGIT_MISMATCH};

/// Validate subcommand arguments.
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub lines: LinesArgs,
}

/// JSON shape of a validation result.
#[derive(Debug, Serialize)]
struct ValidationOutput<'a> {
    valid: bool,
    errors: &'a [CheckDigitMismatch],
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, ctx: &CliContext) -> Result<u8> {
    let record = args.lines.record()?;
    let report = validate_check_digits(&record).context("failed to validate check digits")?;

    if ctx.json {
        let out = ValidationOutput {
            valid: report.is_valid(),
            errors: report.errors(),
        };
        println!("{}", to_json(&out)?);
    } else {
        println!("{}", render_report(&report));
    }
    Ok(exit_code(&report))
}

pub fn exit_code(report: &CheckDigitReport) -> u8 {
    if report.is_valid() {
        0
    } else {
        EXIT_CHECK_DIGIT_MISMATCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE1: &str = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";

    fn args(line2: &str) -> ValidateArgs {
        ValidateArgs {
            lines: LinesArgs {
                line1: Some(LINE1.to_string()),
                line2: Some(line2.to_string()),
                file: None,
            },
        }
    }

    #[test]
    fn valid_zone_exits_zero() {
        let code = run_validate(
            &args("L898902C36UTO7408122F1204159ZE184226B<<<<<10"),
            &CliContext::default(),
        )
        .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn mismatch_exits_two() {
        let code = run_validate(
            &args("L898902C37UTO7408122F1204159ZE184226B<<<<<10"),
            &CliContext::default(),
        )
        .unwrap();
        assert_eq!(code, EXIT_CHECK_DIGIT_MISMATCH);
    }

    #[test]
    fn mismatch_exits_two_in_json_mode() {
        let ctx = CliContext {
            json: true,
            ..CliContext::default()
        };
        let code = run_validate(&args("L898902C36UTO7408122F1204159ZE184226B<<<<<19"), &ctx).unwrap();
        assert_eq!(code, EXIT_CHECK_DIGIT_MISMATCH);
    }

    #[test]
    fn validation_output_json_shape() {
        let report = CheckDigitReport::default();
        let out = ValidationOutput {
            valid: report.is_valid(),
            errors: report.errors(),
        };
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value, serde_json::json!({"valid": true, "errors": []}));
    }
}
