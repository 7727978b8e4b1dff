//! # Lookup CLI — Fetch a stored document and print its MRZ.
//!
//! No persistent store is integrated; lookups are served by
//! `MockDocumentStore`, which returns one fixed passport for any id.

use anyhow::{Context, Result};
use clap::Args;

use mrz_adapters::{IssuedMrz, MrzService};
use mrz_core::Encoder;

use crate::output::{render_document, render_lines, to_json};
use crate::CliContext;

/// Lookup subcommand arguments.
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Document id.
    pub id: String,
}

/// Execute the lookup subcommand against the default service.
pub fn run_lookup(args: &LookupArgs, ctx: &CliContext) -> Result<u8> {
    run_lookup_with(&MrzService::default(), args, ctx)
}

/// Execute the lookup subcommand against `service`.
pub fn run_lookup_with(service: &MrzService, args: &LookupArgs, ctx: &CliContext) -> Result<u8> {
    let service = service.clone().with_encoder(Encoder::new(ctx.config));
    let issued = service
        .issue_mrz(&args.id)
        .with_context(|| format!("failed to issue MRZ for document '{}'", args.id))?;
    println!("{}", render_issued(&issued, ctx.json)?);
    Ok(0)
}

fn render_issued(issued: &IssuedMrz, json: bool) -> Result<String> {
    if json {
        return to_json(issued);
    }
    Ok(format!(
        "{}\n\n{}",
        render_document(&issued.document),
        render_lines(&issued.lines)
    ))
}
