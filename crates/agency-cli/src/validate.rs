//! # Validate Subcommand
//!
//! Runs one payload through the Validator and reports the outcome.
//!
//! Input is a JSON document read from `--input` (a path, or `-` for stdin;
//! stdin is the default) or, for list-query operations, a raw query string
//! passed with `--query`. Results go to stdout; diagnostics go to the
//! tracing subscriber on stderr.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{json, Value};

use agency_core::{AgencyError, Operation, ValidationFailure};
use agency_schema::Validator;

use crate::OutputFormat;

/// Arguments for the `agency validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Operation identifier, e.g. `login`, `createService`, `serviceQuery`.
    #[arg(long, short, env = "AGENCY_OPERATION")]
    pub operation: Operation,

    /// JSON payload file; `-` or omitted reads stdin.
    #[arg(long, short, value_name = "PATH", conflicts_with = "query")]
    pub input: Option<PathBuf>,

    /// Raw query string (`page=2&featured=true`) instead of a JSON payload.
    #[arg(long, short)]
    pub query: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "AGENCY_FORMAT")]
    pub format: OutputFormat,
}

/// Execute the validate subcommand, writing the report to `out`.
///
/// Returns exit code: 0 when accepted, 1 when rejected. Unreadable or
/// undecodable input is an `Err`, which the binary maps to exit code 2.
pub fn run_validate(args: &ValidateArgs, out: &mut impl Write) -> Result<u8> {
    let validator = Validator::new();

    let result = match &args.query {
        Some(raw) => validator.validate_query(args.operation, raw),
        None => {
            let input = read_input(args.input.as_deref())?;
            validator
                .validate(args.operation, &input)
                .map_err(AgencyError::from)
        }
    };

    match result {
        Ok(normalized) => {
            write_accepted(out, args.operation, args.format, &normalized)?;
            Ok(0)
        }
        Err(AgencyError::Rejected(failure)) => {
            write_rejected(out, args.operation, args.format, &failure)?;
            Ok(1)
        }
        Err(e) => Err(e).context("validation could not run"),
    }
}

fn read_input(path: Option<&Path>) -> Result<Value> {
    let text = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("cannot read {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("input is not valid JSON")
}

fn write_accepted(
    out: &mut impl Write,
    operation: Operation,
    format: OutputFormat,
    normalized: &Value,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "ACCEPTED {operation}")?;
            writeln!(out, "{}", serde_json::to_string_pretty(normalized)?)?;
        }
        OutputFormat::Json => {
            let body = json!({
                "operation": operation,
                "accepted": true,
                "value": normalized,
            });
            writeln!(out, "{body}")?;
        }
    }
    Ok(())
}

fn write_rejected(
    out: &mut impl Write,
    operation: Operation,
    format: OutputFormat,
    failure: &ValidationFailure,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "REJECTED {operation}: {} problem(s)", failure.len())?;
            writeln!(out, "{failure}")?;
        }
        OutputFormat::Json => {
            let mut body = serde_json::to_value(failure)?;
            body["operation"] = json!(operation);
            body["accepted"] = json!(false);
            writeln!(out, "{body}")?;
        }
    }
    Ok(())
}
