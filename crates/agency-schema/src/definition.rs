//! # Schema Definitions
//!
//! A [`SchemaDefinition`] binds an [`Operation`] to its root [`ObjectRule`].
//! Construction walks the whole rule tree once and rejects malformed
//! declarations with a [`SchemaDefinitionError`]:
//!
//! - inverted length or numeric bounds
//! - a field that is both required and defaulted
//! - duplicate field names within one object
//! - a reference to a field not declared earlier in the same object
//! - a single-value array outside an alternatives rule
//! - empty alternatives or empty allow-lists
//! - a default that its own rule rejects
//!
//! After construction the definition is immutable and shared read-only by
//! every call.

use serde_json::Value;

use agency_core::path::child;
use agency_core::{Operation, SchemaDefinitionError, ValidationFailure, Violation, ViolationKind};

use crate::rule::{ObjectRule, Rule};

/// The validated rule tree for one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDefinition {
    operation: Operation,
    root: ObjectRule,
}

impl SchemaDefinition {
    /// Check `root` and bind it to `operation`.
    ///
    /// # Errors
    ///
    /// Returns the first structural defect found, in declaration order.
    pub fn new(operation: Operation, root: ObjectRule) -> Result<Self, SchemaDefinitionError> {
        check_object(&root, "")?;
        Ok(Self { operation, root })
    }

    /// The operation this definition validates.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The root object rule.
    pub fn root(&self) -> &ObjectRule {
        &self.root
    }

    /// Run the rule tree over `input`.
    ///
    /// Returns the normalized value, or every violation discovered in the
    /// single pass.
    pub fn evaluate(&self, input: &Value) -> Result<Value, ValidationFailure> {
        self.root.evaluate(input, "").map_err(|violations| {
            ValidationFailure::from_violations(violations).unwrap_or_else(|| {
                ValidationFailure::single(Violation::new(
                    "",
                    ViolationKind::TypeMismatch,
                    "input was rejected",
                ))
            })
        })
    }
}

fn check_object(object: &ObjectRule, path: &str) -> Result<(), SchemaDefinitionError> {
    for (i, field) in object.fields.iter().enumerate() {
        let field_path = child(path, &field.name);
        let earlier = &object.fields[..i];

        if earlier.iter().any(|f| f.name == field.name) {
            return Err(SchemaDefinitionError::DuplicateField { path: field_path });
        }
        if field.required && field.default.is_some() {
            return Err(SchemaDefinitionError::RequiredWithDefault { path: field_path });
        }

        match &field.rule {
            Rule::Reference(reference) => {
                if !earlier.iter().any(|f| f.name == reference.target) {
                    return Err(SchemaDefinitionError::UnresolvedReference {
                        path: field_path,
                        target: reference.target.clone(),
                    });
                }
                check_rule(&reference.rule, &field_path, false)?;
            }
            rule => check_rule(rule, &field_path, false)?,
        }

        if let Some(default) = &field.default {
            if let Err(violations) = field.rule.evaluate(default, &field_path) {
                let reason = violations
                    .first()
                    .map(|v| v.message.clone())
                    .unwrap_or_default();
                return Err(SchemaDefinitionError::DefaultRejected {
                    path: field_path,
                    reason,
                });
            }
        }
    }
    Ok(())
}

fn check_rule(rule: &Rule, path: &str, in_alternatives: bool) -> Result<(), SchemaDefinitionError> {
    match rule {
        Rule::String(s) => {
            if let (Some(min), Some(max)) = (s.min_len, s.max_len) {
                if min > max {
                    return Err(SchemaDefinitionError::InvertedLengthBounds {
                        path: path.to_string(),
                        min,
                        max,
                    });
                }
            }
            Ok(())
        }
        Rule::Number(n) => {
            if let (Some(min), Some(max)) = (n.min, n.max) {
                if min > max {
                    return Err(SchemaDefinitionError::InvertedNumericBounds {
                        path: path.to_string(),
                        min,
                        max,
                    });
                }
            }
            Ok(())
        }
        Rule::Boolean(_) => Ok(()),
        Rule::Enum(e) => {
            if e.allowed.is_empty() {
                return Err(SchemaDefinitionError::EmptyAllowList {
                    path: path.to_string(),
                });
            }
            Ok(())
        }
        Rule::Object(object) => check_object(object, path),
        Rule::Array(array) => {
            if array.single && !in_alternatives {
                return Err(SchemaDefinitionError::SingleValueOutsideAlternatives {
                    path: path.to_string(),
                });
            }
            check_rule(&array.element, path, false)
        }
        Rule::Map(map) => check_rule(&map.value, path, false),
        Rule::Alternatives(alternatives) => {
            if alternatives.candidates.is_empty() {
                return Err(SchemaDefinitionError::EmptyAlternatives {
                    path: path.to_string(),
                });
            }
            alternatives
                .candidates
                .iter()
                .try_for_each(|candidate| check_rule(candidate, path, true))
        }
        // Only meaningful directly under an object field.
        Rule::Reference(reference) => Err(SchemaDefinitionError::UnresolvedReference {
            path: path.to_string(),
            target: reference.target.clone(),
        }),
    }
}
