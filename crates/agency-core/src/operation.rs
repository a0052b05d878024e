//! # Operations: Validator Entry Identifiers
//!
//! Defines the `Operation` enum naming every request payload the site and
//! admin console validate. Each operation owns exactly one Schema
//! Definition; adding a variant forces the schema registry to provide one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AgencyError;

/// A validated request operation.
///
/// Identifiers are the camelCase names used by the HTTP boundary
/// (`login`, `createService`, `serviceQuery`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// Email/password sign-in.
    Login,
    /// Account registration.
    Register,
    /// Password reset request.
    ForgotPassword,
    /// Password reset with a token.
    ResetPassword,
    /// Access token refresh.
    RefreshToken,
    /// Admin: create a service.
    CreateService,
    /// Admin: partially update a service.
    UpdateService,
    /// Admin: create a testimonial.
    CreateTestimonial,
    /// Admin: partially update a testimonial.
    UpdateTestimonial,
    /// Admin: update site settings.
    UpdateSettings,
    /// Public service listing query string.
    ServiceQuery,
    /// Public testimonial listing query string.
    TestimonialQuery,
}

/// Total number of operations.
pub const OPERATION_COUNT: usize = 12;

impl Operation {
    /// Returns all operations in canonical order.
    pub fn all() -> &'static [Operation] {
        &[
            Self::Login,
            Self::Register,
            Self::ForgotPassword,
            Self::ResetPassword,
            Self::RefreshToken,
            Self::CreateService,
            Self::UpdateService,
            Self::CreateTestimonial,
            Self::UpdateTestimonial,
            Self::UpdateSettings,
            Self::ServiceQuery,
            Self::TestimonialQuery,
        ]
    }

    /// Returns the camelCase identifier for this operation.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::ForgotPassword => "forgotPassword",
            Self::ResetPassword => "resetPassword",
            Self::RefreshToken => "refreshToken",
            Self::CreateService => "createService",
            Self::UpdateService => "updateService",
            Self::CreateTestimonial => "createTestimonial",
            Self::UpdateTestimonial => "updateTestimonial",
            Self::UpdateSettings => "updateSettings",
            Self::ServiceQuery => "serviceQuery",
            Self::TestimonialQuery => "testimonialQuery",
        }
    }

    /// Position of this operation in [`Operation::all()`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether input for this operation arrives as raw query text, so
    /// numeric and boolean fields coerce from strings.
    pub fn is_query(&self) -> bool {
        matches!(self, Self::ServiceQuery | Self::TestimonialQuery)
    }

    /// Whether this operation is a partial update requiring at least one
    /// recognized field.
    pub fn is_partial_update(&self) -> bool {
        matches!(
            self,
            Self::UpdateService | Self::UpdateTestimonial | Self::UpdateSettings
        )
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = AgencyError;

    /// Parse an operation from its camelCase identifier.
    ///
    /// Accepts the same identifiers produced by [`Operation::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| AgencyError::UnknownOperation(s.to_string()))
    }
}
