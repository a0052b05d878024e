//! Client testimonial payloads.

use serde_json::json;

use agency_core::ViolationKind;

use crate::rule::{AlternativesRule, EnumRule, Field, MapRule, NumberRule, ObjectRule, StringRule};

use super::{flag, optional_text, text};

const OPTIONAL_TEXT: [&str; 5] = ["role", "company", "industry", "serviceProvided", "projectType"];

/// `createTestimonial`.
pub fn create_testimonial() -> ObjectRule {
    let mut root = ObjectRule::new().field(
        Field::new("name", text().max_len(100))
            .required()
            .message(ViolationKind::MissingRequiredField, "Client name is required"),
    );
    for name in OPTIONAL_TEXT {
        root = root.field(Field::new(name, optional_text()));
    }

    root.field(
        Field::new("rating", NumberRule::int().min(1).max(5))
            .required()
            .message(ViolationKind::NumericOutOfRange, "Rating must be between 1 and 5"),
    )
    .field(Field::new("content", text()).required())
    .field(
        Field::new(
            "metrics",
            AlternativesRule::new()
                .or(MapRule::of(optional_text()))
                .or(EnumRule::of([""])),
        )
        .with_default(json!({})),
    )
    .field(Field::new("linkedin", StringRule::new().trim().uri()))
    .field(Field::new("website", StringRule::new().trim().uri()))
    .field(Field::new("verified", flag()).with_default(true))
    .field(Field::new("featured", flag()).with_default(false))
}

/// `updateTestimonial`: the create shape with every field optional.
pub fn update_testimonial() -> ObjectRule {
    create_testimonial().partial()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> serde_json::Value {
        json!({ "name": "Grace", "rating": 5, "content": "Shipped on time." })
    }

    #[test]
    fn test_create_defaults() {
        let out = create_testimonial().evaluate(&minimal(), "").unwrap();
        assert_eq!(out["metrics"], json!({}));
        assert_eq!(out["verified"], true);
        assert_eq!(out["featured"], false);
        assert_eq!(out["rating"], 5);
    }

    #[test]
    fn test_rating_out_of_range() {
        let mut input = minimal();
        input["rating"] = json!(6);
        let errs = create_testimonial().evaluate(&input, "").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "rating");
        assert_eq!(errs[0].kind, ViolationKind::NumericOutOfRange);
        assert_eq!(errs[0].message, "Rating must be between 1 and 5");
    }

    #[test]
    fn test_rating_string_not_coerced() {
        let mut input = minimal();
        input["rating"] = json!("3");
        let errs = create_testimonial().evaluate(&input, "").unwrap_err();
        assert_eq!(errs[0].kind, ViolationKind::TypeMismatch);
    }

    #[test]
    fn test_metrics_map_values_must_be_strings() {
        let mut input = minimal();
        input["metrics"] = json!({ "revenue": "+40%", "leads": "3x" });
        let out = create_testimonial().evaluate(&input, "").unwrap();
        assert_eq!(out["metrics"]["leads"], "3x");

        input["metrics"] = json!({ "revenue": 40 });
        assert!(create_testimonial().evaluate(&input, "").is_err());
    }

    #[test]
    fn test_links_must_be_http_uris() {
        let mut input = minimal();
        input["website"] = json!("ftp://example.com");
        let errs = create_testimonial().evaluate(&input, "").unwrap_err();
        assert_eq!(errs[0].path, "website");
        assert_eq!(errs[0].kind, ViolationKind::PatternMismatch);
    }

    #[test]
    fn test_update_keeps_absent_fields_absent() {
        let out = update_testimonial().evaluate(&json!({ "rating": 4 }), "").unwrap();
        assert_eq!(out, json!({ "rating": 4 }));
    }
}
