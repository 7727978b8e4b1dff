//! # Encode CLI — Travel-document data to MRZ lines.
//!
//! ```bash
//! mrz encode --input passport.json
//! mrz encode --country UTO --surname Eriksson --given-names "Anna Maria" \
//!     --document-number L898902C3 --nationality UTO --birth-date 740812 \
//!     --sex F --expiry-date 120415 --personal-number ZE184226B
//! ```
//!
//! The JSON input uses the field names of `TravelDocument`; `given_names`
//! may be a list or a single space-separated string.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mrz_core::{Encoder, TravelDocument};

use crate::output::{render_lines, to_json};
use crate::CliContext;

/// Encode subcommand arguments.
#[derive(Args, Debug, Clone, Default)]
pub struct EncodeArgs {
    /// JSON file holding the travel document.
    #[arg(long, conflicts_with_all = [
        "country", "surname", "given_names", "document_number", "nationality",
        "birth_date", "sex", "expiry_date", "personal_number",
    ])]
    pub input: Option<PathBuf>,

    /// Document type code.
    #[arg(long, default_value = "P")]
    pub document_type: String,

    /// Issuing state (three-letter code).
    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub surname: Option<String>,

    /// Given names, space separated.
    #[arg(long)]
    pub given_names: Option<String>,

    #[arg(long)]
    pub document_number: Option<String>,

    /// Nationality (three-letter code).
    #[arg(long)]
    pub nationality: Option<String>,

    /// Birth date as YYMMDD.
    #[arg(long)]
    pub birth_date: Option<String>,

    /// One of M, F, X, <.
    #[arg(long)]
    pub sex: Option<String>,

    /// Expiry date as YYMMDD.
    #[arg(long)]
    pub expiry_date: Option<String>,

    #[arg(long)]
    pub personal_number: Option<String>,
}

/// Execute the encode subcommand.
pub fn run_encode(args: &EncodeArgs, ctx: &CliContext) -> Result<u8> {
    let document = document_from_args(args)?;
    let lines = Encoder::new(ctx.config)
        .encode(&document)
        .context("failed to encode travel document")?;

    if ctx.json {
        println!("{}", to_json(&lines)?);
    } else {
        println!("{}", render_lines(&lines));
    }
    Ok(0)
}

/// Build the document from `--input` or from the individual flags.
pub fn document_from_args(args: &EncodeArgs) -> Result<TravelDocument> {
    if let Some(path) = &args.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path.display()))?;
        return serde_json::from_str(&text)
            .with_context(|| format!("invalid travel document in {}", path.display()));
    }

    let mut builder = TravelDocument::builder().document_type(args.document_type.as_str());
    if let Some(v) = &args.country {
        builder = builder.country_code(v.as_str());
    }
    if let Some(v) = &args.surname {
        builder = builder.surname(v.as_str());
    }
    if let Some(v) = &args.given_names {
        builder = builder.given_names_text(v);
    }
    if let Some(v) = &args.document_number {
        builder = builder.document_number(v.as_str());
    }
    if let Some(v) = &args.nationality {
        builder = builder.nationality(v.as_str());
    }
    if let Some(v) = &args.birth_date {
        builder = builder.birth_date(v.as_str());
    }
    if let Some(v) = &args.sex {
        builder = builder.sex(v.as_str());
    }
    if let Some(v) = &args.expiry_date {
        builder = builder.expiry_date(v.as_str());
    }
    if let Some(v) = &args.personal_number {
        builder = builder.personal_number(v.as_str());
    }
    builder.build().context("incomplete travel document")
}
