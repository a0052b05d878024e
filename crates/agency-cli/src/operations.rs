//! # Operations Subcommand
//!
//! Lists every operation the Validator knows, with its input kind and
//! top-level fields. The JSON listing also carries each field's rule type
//! and whether it is required.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde_json::json;

use agency_core::Operation;
use agency_schema::SchemaRegistry;

use crate::OutputFormat;

/// Arguments for the `agency operations` subcommand.
#[derive(Args, Debug)]
pub struct OperationsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "AGENCY_FORMAT")]
    pub format: OutputFormat,
}

fn input_kind(op: Operation) -> &'static str {
    if op.is_query() {
        "query"
    } else if op.is_partial_update() {
        "partial"
    } else {
        "body"
    }
}

/// Execute the operations subcommand. Always returns exit code 0.
pub fn run_operations(
    args: &OperationsArgs,
    registry: &SchemaRegistry,
    out: &mut impl Write,
) -> Result<u8> {
    match args.format {
        OutputFormat::Text => {
            for op in Operation::all() {
                writeln!(
                    out,
                    "{:<18} {:<8} {}",
                    op.as_str(),
                    input_kind(*op),
                    registry.field_names(*op).join(", ")
                )?;
            }
        }
        OutputFormat::Json => {
            let listing: Vec<_> = Operation::all()
                .iter()
                .map(|op| {
                    let fields: Vec<_> = registry
                        .get(*op)
                        .root()
                        .fields()
                        .iter()
                        .map(|f| {
                            json!({
                                "name": f.name(),
                                "type": f.rule().kind_name(),
                                "required": f.is_required(),
                            })
                        })
                        .collect();
                    json!({
                        "operation": op,
                        "input": input_kind(*op),
                        "fields": fields,
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(format: OutputFormat) -> String {
        let mut out = Vec::new();
        let code = run_operations(&OperationsArgs { format }, agency_schema::global(), &mut out)
            .unwrap();
        assert_eq!(code, 0);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_lists_every_operation() {
        let text = listing(OutputFormat::Text);
        assert_eq!(text.lines().count(), Operation::all().len());
        let login = text.lines().next().unwrap();
        assert!(login.starts_with("login"));
        assert!(login.ends_with("email, password, rememberMe"));
    }

    #[test]
    fn test_json_listing() {
        let parsed: serde_json::Value = serde_json::from_str(&listing(OutputFormat::Json)).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), Operation::all().len());
        let query = items
            .iter()
            .find(|i| i["operation"] == "serviceQuery")
            .unwrap();
        assert_eq!(query["input"], "query");
        assert_eq!(query["fields"][0]["name"], "page");
        assert_eq!(query["fields"][0]["type"], "number");
        assert_eq!(query["fields"][0]["required"], false);
    }

    #[test]
    fn test_input_kinds() {
        assert_eq!(input_kind(Operation::Login), "body");
        assert_eq!(input_kind(Operation::UpdateSettings), "partial");
        assert_eq!(input_kind(Operation::TestimonialQuery), "query");
    }
}
