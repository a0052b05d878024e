//! # Violations: Field-Addressable Validation Problems
//!
//! A rejected validation call produces a [`ValidationFailure`]: an ordered,
//! non-empty sequence of [`Violation`]s. Each violation names the dotted
//! field path it applies to, the [`ViolationKind`] from the error taxonomy,
//! and a human-readable message.
//!
//! Ordering follows schema declaration order, so the same input always
//! produces the same failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The recoverable error taxonomy.
///
/// Every member is reported to the caller inside a [`ValidationFailure`];
/// none of them crosses the validator boundary as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is absent or empty.
    MissingRequiredField,
    /// The value has the wrong JSON type.
    TypeMismatch,
    /// A string is shorter or longer than allowed.
    LengthOutOfRange,
    /// A number is below the minimum, above the maximum, or not an integer.
    NumericOutOfRange,
    /// A string does not match its declared format (email, URI).
    PatternMismatch,
    /// The value is not in the allow-list.
    EnumNotAllowed,
    /// The value does not equal the field it must match.
    CrossFieldMismatch,
    /// A strict object received an undeclared key.
    UnknownField,
    /// A partial-update object received no recognized field.
    NoFieldsProvided,
}

impl ViolationKind {
    /// Returns every violation kind in taxonomy order.
    pub fn all() -> &'static [ViolationKind] {
        &[
            Self::MissingRequiredField,
            Self::TypeMismatch,
            Self::LengthOutOfRange,
            Self::NumericOutOfRange,
            Self::PatternMismatch,
            Self::EnumNotAllowed,
            Self::CrossFieldMismatch,
            Self::UnknownField,
            Self::NoFieldsProvided,
        ]
    }

    /// Returns the stable snake_case code for this kind.
    ///
    /// Matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "missing_required_field",
            Self::TypeMismatch => "type_mismatch",
            Self::LengthOutOfRange => "length_out_of_range",
            Self::NumericOutOfRange => "numeric_out_of_range",
            Self::PatternMismatch => "pattern_mismatch",
            Self::EnumNotAllowed => "enum_not_allowed",
            Self::CrossFieldMismatch => "cross_field_mismatch",
            Self::UnknownField => "unknown_field",
            Self::NoFieldsProvided => "no_fields_provided",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViolationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown violation kind: {s:?}"))
    }
}

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path to the offending field (`company.address.city`,
    /// `features[2]`). Empty for the root object.
    #[serde(rename = "field")]
    pub path: String,
    /// Taxonomy member.
    pub kind: ViolationKind,
    /// Human-readable description.
    pub message: String,
}

impl Violation {
    /// Create a violation.
    pub fn new(path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// The ordered, non-empty list of violations produced by a rejected call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    #[serde(rename = "errors")]
    violations: Vec<Violation>,
}

impl ValidationFailure {
    /// Build a failure from collected violations.
    ///
    /// Returns `None` when `violations` is empty: a failure always carries
    /// at least one `(path, message)` pair.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Build a failure carrying exactly one violation.
    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always `false` for a constructed failure.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations in discovery order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the first violation.
    pub fn first(&self) -> &Violation {
        // Non-empty by construction.
        &self.violations[0]
    }

    /// Violations reported against exactly `path`.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.path == path)
    }

    /// Field path → message pairs, keeping the first message for each path
    /// and the order in which paths were first reported.
    pub fn by_field(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = Vec::with_capacity(self.violations.len());
        for v in &self.violations {
            if !out.iter().any(|(path, _)| *path == v.path) {
                out.push((v.path.as_str(), v.message.as_str()));
            }
        }
        out
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValidationFailure {
        ValidationFailure::from_violations(vec![
            Violation::new("email", ViolationKind::PatternMismatch, "must be a valid email"),
            Violation::new("email", ViolationKind::LengthOutOfRange, "is too long"),
            Violation::new("", ViolationKind::NoFieldsProvided, "at least one field is required"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_failure_is_unrepresentable() {
        assert!(ValidationFailure::from_violations(Vec::new()).is_none());
    }

    #[test]
    fn test_kind_codes_roundtrip() {
        for kind in ViolationKind::all() {
            let parsed: ViolationKind = kind.as_str().parse().unwrap();
            assert_eq!(*kind, parsed);
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_by_field_keeps_first_message() {
        let failure = sample();
        let pairs = failure.by_field();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("email", "must be a valid email"));
        assert_eq!(pairs[1].0, "");
    }

    #[test]
    fn test_display_root_and_field() {
        let display = sample().to_string();
        assert!(display.contains("email: must be a valid email"));
        assert!(display.contains("(root): at least one field is required"));
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["errors"][0]["field"], "email");
        assert_eq!(value["errors"][0]["kind"], "pattern_mismatch");
        assert_eq!(value["errors"][2]["kind"], "no_fields_provided");
    }

    #[test]
    fn test_at_filters_exact_path() {
        let failure = sample();
        assert_eq!(failure.at("email").count(), 2);
        assert_eq!(failure.at("emai").count(), 0);
    }
}
