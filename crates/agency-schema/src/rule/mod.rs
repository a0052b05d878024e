//! # Rule Trees
//!
//! A Schema Definition is a tree of [`Rule`] nodes. Each node kind is one
//! variant; a single recursive [`Rule::evaluate`] dispatches on the tag.
//!
//! ```text
//! Rule
//! ├── String / Number / Boolean / Enum      primitive.rs
//! ├── Object / Array / Map / Alternatives   composite.rs
//! └── Reference                             cross_field.rs
//! ```
//!
//! Evaluation is pure: it borrows the input, allocates the normalized value
//! or the violation list, and touches no shared state.

pub mod composite;
pub mod cross_field;
pub mod primitive;

use serde_json::Value;

use agency_core::Violation;

pub use composite::{AlternativesRule, ArrayRule, Field, MapRule, ObjectRule};
pub use cross_field::ReferenceRule;
pub use primitive::{BooleanRule, EnumRule, Format, NumberRule, StringRule};

/// One node of a Schema Definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// String input, with optional transforms and constraints.
    String(StringRule),
    /// Numeric input, optionally coerced from strings.
    Number(NumberRule),
    /// Boolean input, optionally accepting string equivalents.
    Boolean(BooleanRule),
    /// Value from a fixed allow-list.
    Enum(EnumRule),
    /// Object with named, declared fields.
    Object(ObjectRule),
    /// Array whose elements all satisfy one rule.
    Array(ArrayRule),
    /// Free-form string-keyed map whose values all satisfy one rule.
    Map(MapRule),
    /// Ordered candidates; the first that accepts wins.
    Alternatives(AlternativesRule),
    /// Value that must equal an earlier sibling field.
    Reference(ReferenceRule),
}

impl Rule {
    /// Evaluate `value` found at `path`.
    ///
    /// Returns the normalized value, or a non-empty list of violations.
    pub fn evaluate(&self, value: &Value, path: &str) -> Result<Value, Vec<Violation>> {
        match self {
            Rule::String(rule) => rule.evaluate(value, path).map_err(|v| vec![v]),
            Rule::Number(rule) => rule.evaluate(value, path).map_err(|v| vec![v]),
            Rule::Boolean(rule) => rule.evaluate(value, path).map_err(|v| vec![v]),
            Rule::Enum(rule) => rule.evaluate(value, path).map_err(|v| vec![v]),
            Rule::Object(rule) => rule.evaluate(value, path),
            Rule::Array(rule) => rule.evaluate(value, path),
            Rule::Map(rule) => rule.evaluate(value, path),
            Rule::Alternatives(rule) => rule.evaluate(value, path),
            // Equality is checked by the enclosing object once siblings are known.
            Rule::Reference(rule) => rule.rule.evaluate(value, path),
        }
    }

    /// Short type label used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Rule::String(_) => "string",
            Rule::Number(_) => "number",
            Rule::Boolean(_) => "boolean",
            Rule::Enum(_) => "enum",
            Rule::Object(_) => "object",
            Rule::Array(_) => "array",
            Rule::Map(_) => "map",
            Rule::Alternatives(_) => "alternatives",
            Rule::Reference(_) => "reference",
        }
    }
}

impl From<StringRule> for Rule {
    fn from(rule: StringRule) -> Self {
        Rule::String(rule)
    }
}

impl From<NumberRule> for Rule {
    fn from(rule: NumberRule) -> Self {
        Rule::Number(rule)
    }
}

impl From<BooleanRule> for Rule {
    fn from(rule: BooleanRule) -> Self {
        Rule::Boolean(rule)
    }
}

impl From<EnumRule> for Rule {
    fn from(rule: EnumRule) -> Self {
        Rule::Enum(rule)
    }
}

impl From<ObjectRule> for Rule {
    fn from(rule: ObjectRule) -> Self {
        Rule::Object(rule)
    }
}

impl From<ArrayRule> for Rule {
    fn from(rule: ArrayRule) -> Self {
        Rule::Array(rule)
    }
}

impl From<MapRule> for Rule {
    fn from(rule: MapRule) -> Self {
        Rule::Map(rule)
    }
}

impl From<AlternativesRule> for Rule {
    fn from(rule: AlternativesRule) -> Self {
        Rule::Alternatives(rule)
    }
}

impl From<ReferenceRule> for Rule {
    fn from(rule: ReferenceRule) -> Self {
        Rule::Reference(rule)
    }
}
