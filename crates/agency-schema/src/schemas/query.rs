//! List-query parameters.
//!
//! Values arrive as strings from the query string, so numeric and boolean
//! fields coerce. Paging and sorting fall back to fixed defaults instead of
//! failing as required.

use crate::rule::{BooleanRule, EnumRule, Field, NumberRule, ObjectRule};

use super::optional_text;

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 100;
/// Largest accepted page number, the range of the typed `page` field.
pub const MAX_PAGE: u32 = u32::MAX;

/// Sortable fields for `serviceQuery`.
pub const SERVICE_SORT_FIELDS: [&str; 3] = ["createdAt", "updatedAt", "title"];
/// Sortable fields for `testimonialQuery`.
pub const TESTIMONIAL_SORT_FIELDS: [&str; 4] = ["createdAt", "updatedAt", "name", "rating"];

fn paging(sort_fields: &[&str]) -> ObjectRule {
    ObjectRule::new()
        .field(
            Field::new("page", NumberRule::int().coerce().min(DEFAULT_PAGE).max(MAX_PAGE))
                .with_default(DEFAULT_PAGE),
        )
        .field(
            Field::new(
                "pageSize",
                NumberRule::int().coerce().min(1).max(MAX_PAGE_SIZE),
            )
            .with_default(DEFAULT_PAGE_SIZE),
        )
        .field(Field::new("sort", EnumRule::of(sort_fields.iter().copied())).with_default("createdAt"))
        .field(Field::new("order", EnumRule::of(["asc", "desc"])).with_default("desc"))
}

fn filter_flag(name: &str) -> Field {
    Field::new(name, BooleanRule::new().accept_strings())
}

fn search() -> Field {
    Field::new("search", optional_text().max_len(100))
}

/// `serviceQuery`.
pub fn service_query() -> ObjectRule {
    paging(&SERVICE_SORT_FIELDS)
        .field(filter_flag("featured"))
        .field(search())
}

/// `testimonialQuery`.
pub fn testimonial_query() -> ObjectRule {
    paging(&TESTIMONIAL_SORT_FIELDS)
        .field(filter_flag("featured"))
        .field(filter_flag("verified"))
        .field(search())
}
