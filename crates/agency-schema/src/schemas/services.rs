//! Service catalogue payloads.

use agency_core::ViolationKind;

use crate::rule::{Field, ObjectRule};

use super::{flag, optional_text, string_list, text};

/// Free-text fields that may be submitted blank.
const OPTIONAL_TEXT: [&str; 6] = [
    "overview",
    "icon",
    "cta",
    "metaTitle",
    "metaDescription",
    "pricingHint",
];

/// List fields: array of strings, or `""` from an untouched form control.
const LISTS: [&str; 6] = [
    "features",
    "deliverables",
    "process",
    "techStack",
    "benefits",
    "idealFor",
];

/// `createService`.
pub fn create_service() -> ObjectRule {
    let mut root = ObjectRule::new()
        .field(
            Field::new("title", text().max_len(200))
                .required()
                .message(ViolationKind::MissingRequiredField, "Service title is required"),
        )
        .field(Field::new("tagline", optional_text().max_len(300)))
        .field(Field::new("description", text()).required());

    for name in OPTIONAL_TEXT {
        root = root.field(Field::new(name, optional_text()));
    }
    for name in LISTS {
        root = root.field(Field::new(name, string_list()).with_default(serde_json::json!([])));
    }

    root.field(Field::new("featured", flag()).with_default(false))
}

/// `updateService`: the create shape with every field optional.
pub fn update_service() -> ObjectRule {
    create_service().partial()
}
