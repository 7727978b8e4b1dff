//! # Scan CLI — Read a zone from the scanner and verify it.
//!
//! No reader hardware is integrated, so `mrz scan` fails with a scanner
//! error. `mrz scan --probe` reports adapter health instead of scanning.

use anyhow::{Context, Result};
use clap::Args;

use mrz_adapters::{AdapterDescriptor, MrzService, VerifiedScan};

use crate::output::{render_record, render_report, to_json};
use crate::validate::exit_code;
use crate::CliContext;

/// Scan subcommand arguments.
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Print collaborator health and exit.
    #[arg(long)]
    pub probe: bool,
}

/// Execute the scan subcommand against the default service.
pub fn run_scan(args: &ScanArgs, ctx: &CliContext) -> Result<u8> {
    run_scan_with(&MrzService::default(), args, ctx)
}

/// Execute the scan subcommand against `service`.
pub fn run_scan_with(service: &MrzService, args: &ScanArgs, ctx: &CliContext) -> Result<u8> {
    if args.probe {
        println!("{}", render_probe(&service.probe(), ctx.json)?);
        return Ok(0);
    }

    let scan = service.scan_and_verify().context("scan failed")?;
    println!("{}", render_scan(&scan, ctx.json)?);
    Ok(exit_code(&scan.report))
}

fn render_scan(scan: &VerifiedScan, json: bool) -> Result<String> {
    if json {
        return to_json(scan);
    }
    Ok(format!(
        "{}\n\n{}",
        render_record(&scan.record),
        render_report(&scan.report)
    ))
}

fn render_probe(adapters: &[AdapterDescriptor], json: bool) -> Result<String> {
    if json {
        return to_json(&adapters);
    }
    Ok(adapters
        .iter()
        .map(|a| format!("{:<14} {:<20} {}", a.kind, a.adapter_name, a.health))
        .collect::<Vec<_>>()
        .join("\n"))
}
