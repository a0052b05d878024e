//! # Cross-Field Rules
//!
//! A [`ReferenceRule`] marks a field whose value must equal an earlier
//! sibling (`confirmPassword` must equal `password`). The field's own rule is
//! evaluated like any other; the equality comparison runs in the enclosing
//! object's second pass, after every independent sibling has been
//! normalized.
//!
//! A mismatch is reported against the referencing field's path, never the
//! referenced one.

use serde_json::Value;

use agency_core::{Violation, ViolationKind};

use super::Rule;

/// Rule requiring equality with the sibling field `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRule {
    pub(crate) target: String,
    pub(crate) rule: Box<Rule>,
}

impl ReferenceRule {
    /// The field must satisfy `rule` and equal sibling `target`.
    pub fn new(target: impl Into<String>, rule: impl Into<Rule>) -> Self {
        Self {
            target: target.into(),
            rule: Box::new(rule.into()),
        }
    }

    /// Compare this field's normalized value against the sibling's value.
    ///
    /// `sibling` is `None` when the referenced field is absent. Absence is
    /// reported on the referenced field itself, so there is nothing to compare.
    pub(crate) fn check(
        &self,
        own: &Value,
        sibling: Option<&Value>,
        path: &str,
    ) -> Result<(), Violation> {
        match sibling {
            None => Ok(()),
            Some(other) if other == own => Ok(()),
            Some(_) => Err(Violation::new(
                path,
                ViolationKind::CrossFieldMismatch,
                "does not match",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::StringRule;
    use serde_json::json;

    #[test]
    fn test_equal_values_pass() {
        let rule = ReferenceRule::new("password", StringRule::new());
        assert!(rule
            .check(&json!("Password1"), Some(&json!("Password1")), "confirmPassword")
            .is_ok());
    }

    #[test]
    fn test_mismatch_reported_on_referencing_path() {
        let rule = ReferenceRule::new("password", StringRule::new());
        let err = rule
            .check(&json!("Password2"), Some(&json!("Password1")), "confirmPassword")
            .unwrap_err();
        assert_eq!(err.path, "confirmPassword");
        assert_eq!(err.kind, ViolationKind::CrossFieldMismatch);
        assert_eq!(err.message, "does not match");
    }

    #[test]
    fn test_absent_sibling_is_not_compared() {
        let rule = ReferenceRule::new("password", StringRule::new());
        assert!(rule.check(&json!("x"), None, "confirmPassword").is_ok());
    }

    #[test]
    fn test_comparison_is_exact() {
        let rule = ReferenceRule::new("password", StringRule::new());
        assert!(rule.check(&json!("abc"), Some(&json!("ABC")), "c").is_err());
        assert!(rule.check(&json!("1"), Some(&json!(1)), "c").is_err());
    }
}
