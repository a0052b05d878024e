//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types used throughout the agency workspace. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Bad caller input is reported as a [`ValidationFailure`] carrying
//!   field-addressable violations, wrapped in [`AgencyError::Rejected`] where
//!   a `Result` is needed.
//! - [`SchemaDefinitionError`] signals a malformed Schema Definition. It is a
//!   build-time defect raised while constructing rule trees and is never
//!   triggered by request payloads.

use thiserror::Error;

use crate::violation::ValidationFailure;

/// Top-level error type for the agency workspace.
#[derive(Error, Debug)]
pub enum AgencyError {
    /// The input was validated and rejected.
    #[error("validation rejected:\n{0}")]
    Rejected(ValidationFailure),

    /// A Schema Definition is malformed.
    #[error("schema definition error: {0}")]
    SchemaDefinition(#[from] SchemaDefinitionError),

    /// The operation identifier is not one of the known operations.
    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),

    /// An accepted normalized value could not be decoded into a typed request.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Raw query text could not be decoded.
    #[error("query string error: {0}")]
    Query(String),
}

impl From<ValidationFailure> for AgencyError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Rejected(failure)
    }
}

/// A malformed Schema Definition.
///
/// Every variant names the field path at which the defect was found.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaDefinitionError {
    /// `min_len` is greater than `max_len`.
    #[error("{path}: minimum length {min} exceeds maximum length {max}")]
    InvertedLengthBounds {
        /// Path of the offending rule.
        path: String,
        /// Declared minimum.
        min: usize,
        /// Declared maximum.
        max: usize,
    },

    /// Numeric `min` is greater than numeric `max`.
    #[error("{path}: minimum {min} exceeds maximum {max}")]
    InvertedNumericBounds {
        /// Path of the offending rule.
        path: String,
        /// Declared minimum.
        min: f64,
        /// Declared maximum.
        max: f64,
    },

    /// A field is both required and carries a default.
    #[error("{path}: a required field cannot declare a default")]
    RequiredWithDefault {
        /// Path of the offending field.
        path: String,
    },

    /// Two fields of one object share a name.
    #[error("{path}: field declared more than once")]
    DuplicateField {
        /// Path of the duplicated field.
        path: String,
    },

    /// A reference names a field that is not declared before it.
    #[error("{path}: references '{target}', which is not declared earlier in the same object")]
    UnresolvedReference {
        /// Path of the referencing field.
        path: String,
        /// Name of the missing target.
        target: String,
    },

    /// An array rule accepting a single value is used outside an alternatives rule.
    #[error("{path}: single-value arrays are only allowed as an alternatives candidate")]
    SingleValueOutsideAlternatives {
        /// Path of the offending rule.
        path: String,
    },

    /// An alternatives rule has no candidates.
    #[error("{path}: alternatives rule declares no candidates")]
    EmptyAlternatives {
        /// Path of the offending rule.
        path: String,
    },

    /// An enum rule has an empty allow-list.
    #[error("{path}: enum rule declares no allowed values")]
    EmptyAllowList {
        /// Path of the offending rule.
        path: String,
    },

    /// A declared default fails the field's own rule.
    #[error("{path}: default value is rejected by its own rule: {reason}")]
    DefaultRejected {
        /// Path of the offending field.
        path: String,
        /// First violation raised against the default.
        reason: String,
    },
}
