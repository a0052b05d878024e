//! # agency-cli: Validation from the Command Line
//!
//! Provides the `agency` binary, a thin shell over
//! [`agency_schema::Validator`] for checking payloads by hand or in scripts.
//!
//! ## Subcommands
//!
//! - `agency validate`: validate a JSON payload (file or stdin) or a raw
//!   query string against one operation.
//! - `agency operations`: list every operation and its top-level fields.
//!
//! ```bash
//! agency validate --operation login --input payload.json
//! echo '{"title":"SEO"}' | agency validate -o createService --format json
//! agency validate -o serviceQuery --query 'page=2&featured=true'
//! ```
//!
//! ## Exit Status
//!
//! `0` accepted, `1` rejected, `2` usage or I/O error.

pub mod operations;
pub mod validate;

use clap::ValueEnum;

/// Output format shared by all subcommands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document on stdout.
    Json,
}
