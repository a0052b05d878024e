//! # agency-schema: Declarative Request Validation
//!
//! Validates and normalizes the request payloads of the agency site and its
//! admin console: authentication, services, testimonials, settings, and the
//! public list queries.
//!
//! ## Rule Engine (`rule`)
//!
//! A Schema Definition is a tree of [`Rule`] nodes: strings, numbers,
//! booleans, allow-lists, objects, arrays, free-form maps, ordered
//! alternatives, and references to sibling fields. Objects evaluate in two
//! passes so a reference always sees its already-normalized target.
//!
//! ## Definitions (`definition`, `schemas`, `registry`)
//!
//! [`SchemaDefinition::new`] checks a tree for structural defects before it
//! can be used. [`schemas`] declares one tree per [`Operation`], and the
//! [`SchemaRegistry`] built from them is shared process-wide.
//!
//! ## Entry Point (`validator`)
//!
//! - [`Validator::validate`]: raw JSON in, Normalized Value or
//!   [`ValidationFailure`] out.
//! - [`Validator::validate_query`]: the same for raw query strings.
//! - [`Validator::validate_as`]: validate, then deserialize into a typed DTO.
//!
//! ## Crate Policy
//!
//! - Depends only on `agency-core` internally.
//! - Bad input is never an `Err` other than a [`ValidationFailure`] and never
//!   panics.
//! - Schema trees are immutable once built.

pub mod definition;
pub mod dto;
pub mod query;
pub mod registry;
pub mod rule;
pub mod schemas;
pub mod validator;

pub use agency_core::{Operation, ValidationFailure, Violation, ViolationKind};
pub use definition::SchemaDefinition;
pub use dto::Request;
pub use query::parse_query;
pub use registry::{global, SchemaRegistry};
pub use rule::Rule;
pub use validator::Validator;

/// Validate `input` for `operation` against the built-in registry.
pub fn validate(
    operation: Operation,
    input: &serde_json::Value,
) -> Result<serde_json::Value, ValidationFailure> {
    Validator::new().validate(operation, input)
}
