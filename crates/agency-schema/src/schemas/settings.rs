//! Site-wide settings.
//!
//! `updateSettings` is always a partial update: the top-level object needs
//! at least one recognized section, and every section is itself optional.
//! Link fields accept `""` so a saved link can be cleared.

use crate::rule::{Field, MapRule, ObjectRule, StringRule};

use super::{flag, optional_text, string_list, text};

fn link() -> StringRule {
    StringRule::new().trim().uri().allow_empty()
}

fn site() -> ObjectRule {
    ObjectRule::new()
        .field(Field::new("name", text().max_len(100)))
        .field(Field::new("tagline", optional_text().max_len(200)))
        .field(Field::new("description", optional_text().max_len(500)))
        .field(Field::new("logo", link()))
        .field(Field::new("favicon", link()))
}

fn address() -> ObjectRule {
    ObjectRule::new()
        .field(Field::new("street", optional_text()))
        .field(Field::new("city", optional_text()))
        .field(Field::new("state", optional_text()))
        .field(Field::new("postalCode", optional_text().max_len(20)))
        .field(Field::new("country", optional_text()))
}

fn company() -> ObjectRule {
    ObjectRule::new()
        .field(Field::new("name", text().max_len(100)))
        .field(Field::new("email", StringRule::new().trim().lowercase().email()))
        .field(Field::new("phone", optional_text().max_len(30)))
        .field(Field::new("address", address()))
        .field(Field::new("businessHours", MapRule::of(optional_text())))
}

fn social() -> ObjectRule {
    ["facebook", "twitter", "linkedin", "instagram", "github", "youtube", "dribbble"]
        .into_iter()
        .fold(ObjectRule::new(), |object, name| object.field(Field::new(name, link())))
}

fn seo() -> ObjectRule {
    ObjectRule::new()
        .field(Field::new("metaTitle", optional_text().max_len(70)))
        .field(Field::new("metaDescription", optional_text().max_len(160)))
        .field(Field::new("keywords", string_list()))
        .field(Field::new("ogImage", link()))
}

/// `updateSettings`.
pub fn update_settings() -> ObjectRule {
    ObjectRule::new()
        .field(Field::new("site", site()))
        .field(Field::new("company", company()))
        .field(Field::new("social", social()))
        .field(Field::new("seo", seo()))
        .field(Field::new("features", MapRule::of(flag())))
        .at_least_one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_core::ViolationKind;
    use serde_json::json;

    #[test]
    fn test_single_section_accepted() {
        let out = update_settings()
            .evaluate(&json!({ "social": { "github": "https://github.com/acme", "twitter": "" } }), "")
            .unwrap();
        assert_eq!(
            out,
            json!({ "social": { "github": "https://github.com/acme", "twitter": "" } })
        );
    }

    #[test]
    fn test_empty_object_is_no_fields_provided() {
        let errs = update_settings().evaluate(&json!({}), "").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "");
        assert_eq!(errs[0].kind, ViolationKind::NoFieldsProvided);
    }

    #[test]
    fn test_nested_address_path() {
        let errs = update_settings()
            .evaluate(
                &json!({ "company": { "address": { "postalCode": "x".repeat(21) } } }),
                "",
            )
            .unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "company.address.postalCode");
    }

    #[test]
    fn test_business_hours_and_features_maps() {
        let out = update_settings()
            .evaluate(
                &json!({
                    "company": { "businessHours": { "mon": "9-5", "sun": "" } },
                    "features": { "blog": true, "shop": "false" }
                }),
                "",
            )
            .unwrap();
        assert_eq!(out["company"]["businessHours"]["mon"], "9-5");
        assert_eq!(out["features"]["shop"], "false");

        let errs = update_settings()
            .evaluate(&json!({ "features": { "blog": "yes" } }), "")
            .unwrap_err();
        assert_eq!(errs[0].path, "features.blog");
    }

    #[test]
    fn test_keywords_list_or_blank() {
        let settings = update_settings();
        assert!(settings.evaluate(&json!({ "seo": { "keywords": ["rust"] } }), "").is_ok());
        assert!(settings.evaluate(&json!({ "seo": { "keywords": "" } }), "").is_ok());
        assert!(settings.evaluate(&json!({ "seo": { "keywords": "rust" } }), "").is_err());
    }

    #[test]
    fn test_section_must_be_object() {
        let errs = update_settings().evaluate(&json!({ "site": "Acme" }), "").unwrap_err();
        assert_eq!(errs[0].path, "site");
        assert_eq!(errs[0].kind, ViolationKind::TypeMismatch);
    }
}
