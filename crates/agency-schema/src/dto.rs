//! # Typed Request DTOs
//!
//! Strongly typed views of normalized values. Each DTO names its
//! [`Operation`] through the [`Request`] trait, so
//! [`Validator::validate_as`](crate::Validator::validate_as) can validate and
//! deserialize in one step.
//!
//! DTOs mirror the normalized shape exactly: fields that keep a blank-form
//! spelling (`""` for lists, `"true"` for flags) use the small untagged
//! enums below instead of losing that information.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use agency_core::Operation;

/// A request type bound to one operation's Schema Definition.
pub trait Request: DeserializeOwned {
    /// Operation whose normalized value this type deserializes.
    const OPERATION: Operation;
}

macro_rules! request {
    ($ty:ty => $op:ident) => {
        impl Request for $ty {
            const OPERATION: Operation = Operation::$op;
        }
    };
}

// ─── Blank-form Shapes ───────────────────────────────────────────────

/// Array of strings, or the literal `""` a blank form field submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    Items(Vec<String>),
    Blank(String),
}

impl StringList {
    /// The items, treating a blank submission as empty.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Items(items) => items,
            Self::Blank(_) => Vec::new(),
        }
    }
}

/// Boolean, or its string spelling as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    /// Truth value; only `"true"` is true among string spellings.
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => s == "true",
        }
    }
}

/// String-valued metrics map, or `""` from a blank form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metrics {
    Map(BTreeMap<String, String>),
    Blank(String),
}

impl Metrics {
    /// The entries, treating a blank submission as empty.
    pub fn into_map(self) -> BTreeMap<String, String> {
        match self {
            Self::Map(map) => map,
            Self::Blank(_) => BTreeMap::new(),
        }
    }
}

// ─── Auth ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}
request!(LoginRequest => Login);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}
request!(RegisterRequest => Register);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}
request!(ForgotPasswordRequest => ForgotPassword);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}
request!(ResetPasswordRequest => ResetPassword);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}
request!(RefreshTokenRequest => RefreshToken);

// ─── Services ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub title: String,
    pub tagline: Option<String>,
    pub description: String,
    pub overview: Option<String>,
    pub icon: Option<String>,
    pub cta: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub pricing_hint: Option<String>,
    pub features: StringList,
    pub deliverables: StringList,
    pub process: StringList,
    pub tech_stack: StringList,
    pub benefits: StringList,
    pub ideal_for: StringList,
    pub featured: Flag,
}
request!(CreateServiceRequest => CreateService);

/// Only the fields the caller sent are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub icon: Option<String>,
    pub cta: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub pricing_hint: Option<String>,
    pub features: Option<StringList>,
    pub deliverables: Option<StringList>,
    pub process: Option<StringList>,
    pub tech_stack: Option<StringList>,
    pub benefits: Option<StringList>,
    pub ideal_for: Option<StringList>,
    pub featured: Option<Flag>,
}
request!(UpdateServiceRequest => UpdateService);

// ─── Testimonials ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonialRequest {
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub service_provided: Option<String>,
    pub project_type: Option<String>,
    pub rating: u8,
    pub content: String,
    pub metrics: Metrics,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub verified: Flag,
    pub featured: Flag,
}
request!(CreateTestimonialRequest => CreateTestimonial);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonialRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub service_provided: Option<String>,
    pub project_type: Option<String>,
    pub rating: Option<u8>,
    pub content: Option<String>,
    pub metrics: Option<Metrics>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub verified: Option<Flag>,
    pub featured: Option<Flag>,
}
request!(UpdateTestimonialRequest => UpdateTestimonial);

// ─── Settings ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub favicon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub business_hours: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub github: Option<String>,
    pub youtube: Option<String>,
    pub dribbble: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSettings {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<StringList>,
    pub og_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub site: Option<SiteSettings>,
    pub company: Option<CompanySettings>,
    pub social: Option<SocialLinks>,
    pub seo: Option<SeoSettings>,
    pub features: Option<BTreeMap<String, Flag>>,
}
request!(UpdateSettingsRequest => UpdateSettings);

// ─── List Queries ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceSort {
    CreatedAt,
    UpdatedAt,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestimonialSort {
    CreatedAt,
    UpdatedAt,
    Name,
    Rating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceQuery {
    pub page: u32,
    pub page_size: u32,
    pub sort: ServiceSort,
    pub order: SortOrder,
    pub featured: Option<bool>,
    pub search: Option<String>,
}
request!(ServiceQuery => ServiceQuery);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialQuery {
    pub page: u32,
    pub page_size: u32,
    pub sort: TestimonialSort,
    pub order: SortOrder,
    pub featured: Option<bool>,
    pub verified: Option<bool>,
    pub search: Option<String>,
}
request!(TestimonialQuery => TestimonialQuery);
