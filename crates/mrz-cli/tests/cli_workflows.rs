//! Subcommand handlers driven through files on disk.

use std::path::Path;

use mrz_cli::decode::{run_decode, DecodeArgs};
use mrz_cli::encode::{run_encode, EncodeArgs};
use mrz_cli::validate::{run_validate, ValidateArgs};
use mrz_cli::{resolve_config, CliContext, LinesArgs, EXIT_CHECK_DIGIT_MISMATCH};

const DOCUMENT_JSON: &str = r#"{
    "document_type": "P",
    "country_code": "UTO",
    "surname": "Eriksson",
    "given_names": ["Anna", "Maria"],
    "document_number": "L898902C3",
    "nationality": "UTO",
    "birth_date": "740812",
    "sex": "F",
    "expiry_date": "120415",
    "personal_number": "ZE184226B"
}"#;

fn file_args(path: &Path) -> LinesArgs {
    LinesArgs {
        file: Some(path.to_path_buf()),
        ..LinesArgs::default()
    }
}

#[test]
fn encode_from_json_file_then_validate_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.json");
    std::fs::write(&input, DOCUMENT_JSON).unwrap();

    let args = EncodeArgs {
        input: Some(input.clone()),
        ..EncodeArgs::default()
    };
    let ctx = CliContext::default();
    assert_eq!(run_encode(&args, &ctx).unwrap(), 0);

    let doc = mrz_cli::encode::document_from_args(&args).unwrap();
    let lines = mrz_core::encode(&doc).unwrap();
    let zone = dir.path().join("zone.txt");
    std::fs::write(&zone, format!("{lines}\n")).unwrap();

    let lines_args = file_args(&zone);
    assert_eq!(
        run_decode(&DecodeArgs { lines: lines_args.clone() }, &ctx).unwrap(),
        0
    );
    assert_eq!(
        run_validate(&ValidateArgs { lines: lines_args }, &ctx).unwrap(),
        0
    );
}

#[test]
fn tampered_file_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let zone = dir.path().join("zone.txt");
    std::fs::write(
        &zone,
        "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
         L898902C36UTO7408122F1204159ZE184226B<<<<<17\n",
    )
    .unwrap();

    let ctx = CliContext {
        json: true,
        ..CliContext::default()
    };
    let code = run_validate(&ValidateArgs { lines: file_args(&zone) }, &ctx).unwrap();
    assert_eq!(code, EXIT_CHECK_DIGIT_MISMATCH);
}

#[test]
fn file_with_three_lines_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let zone = dir.path().join("zone.txt");
    std::fs::write(&zone, "A\nB\nC\n").unwrap();

    let err = run_decode(&DecodeArgs { lines: file_args(&zone) }, &CliContext::default())
        .unwrap_err();
    assert!(format!("{err:#}").contains("invalid MRZ in"));
}

#[test]
fn narrow_name_field_from_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.json");
    std::fs::write(&input, DOCUMENT_JSON).unwrap();

    let ctx = CliContext {
        json: false,
        config: resolve_config(Some(8)).unwrap(),
    };
    let args = EncodeArgs {
        input: Some(input),
        ..EncodeArgs::default()
    };
    assert_eq!(run_encode(&args, &ctx).unwrap(), 0);

    let doc = mrz_cli::encode::document_from_args(&args).unwrap();
    let lines = mrz_core::Encoder::new(ctx.config).encode(&doc).unwrap();
    assert_eq!(lines.line1(), format!("P<UTOERIKSSON{}", "<".repeat(31)));
}
