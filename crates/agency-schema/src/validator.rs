//! # Validator
//!
//! The single entry point callers use: hand it an [`Operation`] and a raw
//! value, get back either the Normalized Value or a [`ValidationFailure`].
//!
//! Every call is atomic and pure. The Validator holds only a shared
//! reference to an immutable [`SchemaRegistry`], so it is `Copy` and can be
//! used from any number of threads at once.

use serde_json::Value;

use agency_core::{AgencyError, Operation, ValidationFailure};

use crate::dto::Request;
use crate::query::parse_query;
use crate::registry::{global, SchemaRegistry};

/// Validates raw input against the Schema Definitions of a registry.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    registry: &'a SchemaRegistry,
}

impl Validator<'static> {
    /// A validator over the built-in registry.
    pub fn new() -> Self {
        Self { registry: global() }
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Validator<'a> {
    /// A validator over a caller-built registry.
    pub fn with_registry(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Validate `input` for `operation`.
    ///
    /// Returns the Normalized Value with every default applied, or the
    /// complete ordered list of problems found in one pass.
    pub fn validate(&self, operation: Operation, input: &Value) -> Result<Value, ValidationFailure> {
        match self.registry.get(operation).evaluate(input) {
            Ok(normalized) => {
                tracing::debug!(
                    %operation,
                    fields = normalized.as_object().map_or(0, |o| o.len()),
                    "input accepted"
                );
                Ok(normalized)
            }
            Err(failure) => {
                tracing::debug!(%operation, violations = failure.len(), "input rejected");
                for v in failure.violations() {
                    tracing::trace!(%operation, field = %v.path, kind = %v.kind, "{}", v.message);
                }
                Err(failure)
            }
        }
    }

    /// Parse a raw query string and validate it for `operation`.
    ///
    /// # Errors
    ///
    /// [`AgencyError::Query`] when the text cannot be decoded,
    /// [`AgencyError::Rejected`] when the decoded parameters fail validation.
    pub fn validate_query(&self, operation: Operation, raw: &str) -> Result<Value, AgencyError> {
        let params = parse_query(raw)?;
        Ok(self.validate(operation, &params)?)
    }

    /// Validate `input` for `T`'s operation and deserialize the Normalized
    /// Value into `T`.
    ///
    /// # Errors
    ///
    /// [`AgencyError::Rejected`] when validation fails,
    /// [`AgencyError::Decode`] when the normalized shape does not fit `T`.
    pub fn validate_as<T: Request>(&self, input: &Value) -> Result<T, AgencyError> {
        let normalized = self.validate(T::OPERATION, input)?;
        Ok(serde_json::from_value(normalized)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{CreateServiceRequest, LoginRequest, ServiceQuery, SortOrder};
    use agency_core::ViolationKind;
    use serde_json::json;

    #[test]
    fn test_validate_accepts_and_normalizes() {
        let out = Validator::new()
            .validate(Operation::ForgotPassword, &json!({ "email": " A@B.COM " }))
            .unwrap();
        assert_eq!(out, json!({ "email": "a@b.com" }));
    }

    #[test]
    fn test_validate_rejects_non_object() {
        let failure = Validator::new()
            .validate(Operation::Login, &json!("not an object"))
            .unwrap_err();
        assert_eq!(failure.len(), 1);
        assert_eq!(failure.first().path, "");
        assert_eq!(failure.first().kind, ViolationKind::TypeMismatch);
    }

    #[test]
    fn test_validate_query_coerces() {
        let out = Validator::new()
            .validate_query(Operation::ServiceQuery, "page=3&featured=true&search=web+design")
            .unwrap();
        assert_eq!(out["page"], 3);
        assert_eq!(out["featured"], true);
        assert_eq!(out["search"], "web design");
    }

    #[test]
    fn test_validate_query_rejection_is_rejected_error() {
        let err = Validator::new()
            .validate_query(Operation::ServiceQuery, "pageSize=abc")
            .unwrap_err();
        match err {
            AgencyError::Rejected(failure) => assert_eq!(failure.first().path, "pageSize"),
            other => panic!("Expected Rejected, got: {other:?}"),
        }
    }

    #[test]
    fn test_validate_as_login() {
        let login: LoginRequest = Validator::new()
            .validate_as(&json!({ "email": "ada@example.com", "password": "hunter22" }))
            .unwrap();
        assert_eq!(login.email, "ada@example.com");
        assert!(!login.remember_me);
    }

    #[test]
    fn test_validate_as_service_defaults() {
        let service: CreateServiceRequest = Validator::new()
            .validate_as(&json!({ "title": "SEO", "description": "Search", "features": "" }))
            .unwrap();
        assert!(service.features.into_vec().is_empty());
        assert!(service.benefits.into_vec().is_empty());
        assert!(!service.featured.as_bool());
    }

    #[test]
    fn test_validate_as_query_defaults() {
        let query: ServiceQuery = Validator::new().validate_as(&json!({})).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.order, SortOrder::Desc);
        assert_eq!(query.featured, None);
    }

    #[test]
    fn test_validate_as_rejection() {
        let err = Validator::new()
            .validate_as::<LoginRequest>(&json!({}))
            .unwrap_err();
        assert!(matches!(err, AgencyError::Rejected(ref f) if f.len() == 2));
    }

    #[test]
    fn test_validate_as_large_page_is_rejection_not_decode_error() {
        let err = Validator::new()
            .validate_as::<ServiceQuery>(&json!({ "page": "5000000000" }))
            .unwrap_err();
        match err {
            AgencyError::Rejected(failure) => {
                assert_eq!(failure.len(), 1);
                assert_eq!(failure.first().path, "page");
                assert_eq!(failure.first().kind, ViolationKind::NumericOutOfRange);
            }
            other => panic!("expected a rejection, got {other:?}"),
        }

        let query: ServiceQuery = Validator::new()
            .validate_as(&json!({ "page": u32::MAX.to_string() }))
            .unwrap();
        assert_eq!(query.page, u32::MAX);
    }

    #[test]
    fn test_with_registry() {
        let registry = SchemaRegistry::build().unwrap();
        let validator = Validator::with_registry(&registry);
        assert!(validator
            .validate(Operation::RefreshToken, &json!({ "refreshToken": "abc" }))
            .is_ok());
    }
}
