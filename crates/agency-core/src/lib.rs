//! # agency-core: Foundational Types for Request Validation
//!
//! This crate is the leaf of the agency workspace. It defines the types every
//! other crate exchanges with the validator: which operation is being
//! validated, where a problem was found, and what kind of problem it is.
//!
//! ## Key Design Principles
//!
//! 1. **One `Operation` enum.** Every validated payload is named by a variant;
//!    exhaustive `match` in the schema registry makes a missing schema a
//!    compile error.
//!
//! 2. **Failures are data.** Bad input produces a [`ValidationFailure`], an
//!    ordered and never-empty list of [`Violation`]s. Nothing is thrown for
//!    bad input.
//!
//! 3. **Malformed schemas are a separate error.** [`SchemaDefinitionError`]
//!    only arises while constructing rule trees.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `agency-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod operation;
pub mod path;
pub mod violation;

// Re-export primary types for ergonomic imports.
pub use error::{AgencyError, SchemaDefinitionError};
pub use operation::{Operation, OPERATION_COUNT};
pub use violation::{ValidationFailure, Violation, ViolationKind};
