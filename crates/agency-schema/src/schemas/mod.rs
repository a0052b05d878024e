//! # Per-Operation Schema Definitions
//!
//! One rule tree per [`Operation`]. The match in [`definition`] is
//! exhaustive, so adding an operation without a schema does not compile.
//!
//! Shared field shapes live here; each submodule assembles the trees for
//! one area of the site.

pub mod auth;
pub mod query;
pub mod services;
pub mod settings;
pub mod testimonials;

use agency_core::{Operation, SchemaDefinitionError};

use crate::definition::SchemaDefinition;
use crate::rule::{AlternativesRule, ArrayRule, BooleanRule, EnumRule, ObjectRule, StringRule};

/// Build the Schema Definition for `operation`.
///
/// # Errors
///
/// Returns a [`SchemaDefinitionError`] if the declared tree is malformed.
pub fn definition(operation: Operation) -> Result<SchemaDefinition, SchemaDefinitionError> {
    let root: ObjectRule = match operation {
        Operation::Login => auth::login(),
        Operation::Register => auth::register(),
        Operation::ForgotPassword => auth::forgot_password(),
        Operation::ResetPassword => auth::reset_password(),
        Operation::RefreshToken => auth::refresh_token(),
        Operation::CreateService => services::create_service(),
        Operation::UpdateService => services::update_service(),
        Operation::CreateTestimonial => testimonials::create_testimonial(),
        Operation::UpdateTestimonial => testimonials::update_testimonial(),
        Operation::UpdateSettings => settings::update_settings(),
        Operation::ServiceQuery => query::service_query(),
        Operation::TestimonialQuery => query::testimonial_query(),
    };
    SchemaDefinition::new(operation, root)
}

/// Trimmed string that must not be empty.
pub(crate) fn text() -> StringRule {
    StringRule::new().trim()
}

/// Trimmed string where `""` is a legitimate value.
pub(crate) fn optional_text() -> StringRule {
    StringRule::new().trim().allow_empty()
}

/// Array of strings, or the empty string submitted by a blank form field.
pub(crate) fn string_list() -> AlternativesRule {
    AlternativesRule::new()
        .or(ArrayRule::of(text()))
        .or(EnumRule::of([""]))
}

/// Native boolean, or its string spelling kept as submitted.
pub(crate) fn flag() -> AlternativesRule {
    AlternativesRule::new()
        .or(BooleanRule::new())
        .or(EnumRule::of(["true", "false"]))
}
