//! # Composite Rules
//!
//! Objects, arrays, free-form maps, and alternatives. Composite evaluation
//! recurses through [`Rule::evaluate`] and is pure with respect to its input.
//!
//! ## Object evaluation
//!
//! An object is evaluated in two passes over its declared fields:
//!
//! 1. every field whose rule is not a [`ReferenceRule`], in declaration order;
//! 2. every reference field, after the siblings it names are normalized.
//!
//! Violations are then assembled in declaration order, followed by one
//! `UnknownField` violation per undeclared key when the object is strict.
//! Undeclared keys are otherwise ignored and dropped from the output.
//!
//! Defaults are applied on the field's accept path: an absent optional field
//! with a default contributes the default, so the at-least-one-field check
//! can still tell "explicitly provided" from "defaulted" by looking at the
//! raw input keys.

use serde_json::{Map, Value};

use agency_core::path::{child, element};
use agency_core::{Violation, ViolationKind};

use super::{ReferenceRule, Rule};

// ─── Field ───────────────────────────────────────────────────────────

/// A named field of an [`ObjectRule`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) rule: Rule,
    pub(crate) required: bool,
    pub(crate) default: Option<Value>,
    pub(crate) messages: Vec<(ViolationKind, String)>,
}

/// Per-field result of the first and second pass.
enum FieldOutcome {
    Absent,
    Present(Value),
    Rejected(Vec<Violation>),
    Deferred,
}

impl Field {
    /// An optional field with no default.
    pub fn new(name: impl Into<String>, rule: impl Into<Rule>) -> Self {
        Self {
            name: name.into(),
            rule: rule.into(),
            required: false,
            default: None,
            messages: Vec::new(),
        }
    }

    /// Absence is a `MissingRequiredField` violation.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Value substituted when the field is absent.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Replace the generic message for `kind` at this field's own path.
    pub fn message(mut self, kind: ViolationKind, text: impl Into<String>) -> Self {
        self.messages.push((kind, text.into()));
        self
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Whether the field must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Declared default, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    fn evaluate(&self, raw: Option<&Value>, parent: &str) -> FieldOutcome {
        let path = child(parent, &self.name);
        match raw {
            None if self.required => FieldOutcome::Rejected(self.relabel(
                vec![Violation::new(
                    &path,
                    ViolationKind::MissingRequiredField,
                    "is required",
                )],
                &path,
            )),
            None => match &self.default {
                Some(default) => FieldOutcome::Present(default.clone()),
                None => FieldOutcome::Absent,
            },
            Some(value) => match self.rule.evaluate(value, &path) {
                Ok(normalized) => FieldOutcome::Present(normalized),
                Err(violations) => FieldOutcome::Rejected(self.relabel(violations, &path)),
            },
        }
    }

    /// Apply message overrides to violations raised at this field's own path.
    fn relabel(&self, mut violations: Vec<Violation>, path: &str) -> Vec<Violation> {
        for v in violations.iter_mut().filter(|v| v.path == path) {
            if let Some((_, text)) = self.messages.iter().find(|(kind, _)| *kind == v.kind) {
                v.message = text.clone();
            }
        }
        violations
    }
}

// ─── Object ──────────────────────────────────────────────────────────

/// Object with declared fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectRule {
    pub(crate) fields: Vec<Field>,
    pub(crate) strict: bool,
    pub(crate) at_least_one: bool,
}

impl ObjectRule {
    /// An object with no fields that ignores undeclared keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Fields are evaluated and reported in declaration order.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Reject undeclared keys with one `UnknownField` violation each.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Reject the object with `NoFieldsProvided` when no declared key is
    /// present in the input.
    pub fn at_least_one(mut self) -> Self {
        self.at_least_one = true;
        self
    }

    /// Derive a partial-update variant: every field optional, no defaults,
    /// at least one field required. Nested rules are kept as declared.
    pub fn partial(&self) -> Self {
        let fields = self
            .fields
            .iter()
            .cloned()
            .map(|mut field| {
                field.required = false;
                field.default = None;
                field
            })
            .collect();
        Self {
            fields,
            strict: self.strict,
            at_least_one: true,
        }
    }

    /// Declared fields in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a declared field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub(crate) fn evaluate(&self, value: &Value, path: &str) -> Result<Value, Vec<Violation>> {
        let input = value.as_object().ok_or_else(|| {
            vec![Violation::new(path, ViolationKind::TypeMismatch, "must be an object")]
        })?;

        if self.at_least_one && !self.fields.iter().any(|f| input.contains_key(&f.name)) {
            return Err(vec![Violation::new(
                path,
                ViolationKind::NoFieldsProvided,
                "must contain at least one recognized field",
            )]);
        }

        // Pass 1: independent fields.
        let mut outcomes: Vec<FieldOutcome> = self
            .fields
            .iter()
            .map(|field| match field.rule {
                Rule::Reference(_) => FieldOutcome::Deferred,
                _ => field.evaluate(input.get(&field.name), path),
            })
            .collect();

        // Pass 2: fields referencing earlier siblings.
        for (i, field) in self.fields.iter().enumerate() {
            let Rule::Reference(reference) = &field.rule else {
                continue;
            };
            let outcome = match field.evaluate(input.get(&field.name), path) {
                FieldOutcome::Present(own) => {
                    let field_path = child(path, &field.name);
                    let sibling = sibling_value(&self.fields, &outcomes, input, reference);
                    match reference.check(&own, sibling, &field_path) {
                        Ok(()) => FieldOutcome::Present(own),
                        Err(v) => FieldOutcome::Rejected(field.relabel(vec![v], &field_path)),
                    }
                }
                other => other,
            };
            outcomes[i] = outcome;
        }

        let mut normalized = Map::new();
        let mut violations = Vec::new();
        for (field, outcome) in self.fields.iter().zip(outcomes) {
            match outcome {
                FieldOutcome::Present(v) => {
                    normalized.insert(field.name.clone(), v);
                }
                FieldOutcome::Rejected(vs) => violations.extend(vs),
                FieldOutcome::Absent | FieldOutcome::Deferred => {}
            }
        }

        if self.strict {
            for key in input.keys().filter(|k| self.get(k).is_none()) {
                violations.push(Violation::new(
                    child(path, key),
                    ViolationKind::UnknownField,
                    "is not allowed",
                ));
            }
        }

        if violations.is_empty() {
            Ok(Value::Object(normalized))
        } else {
            Err(violations)
        }
    }
}

/// Value a reference field is compared against: the sibling's normalized
/// value when it was accepted, its raw input when it was rejected.
fn sibling_value<'a>(
    fields: &[Field],
    outcomes: &'a [FieldOutcome],
    input: &'a Map<String, Value>,
    reference: &ReferenceRule,
) -> Option<&'a Value> {
    let index = fields.iter().position(|f| f.name == reference.target)?;
    match &outcomes[index] {
        FieldOutcome::Present(v) => Some(v),
        FieldOutcome::Absent => None,
        FieldOutcome::Rejected(_) | FieldOutcome::Deferred => input.get(&reference.target),
    }
}

// ─── Array ───────────────────────────────────────────────────────────

/// Array whose elements all satisfy one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayRule {
    pub(crate) element: Box<Rule>,
    pub(crate) single: bool,
}

impl ArrayRule {
    /// Array of `element`.
    pub fn of(element: impl Into<Rule>) -> Self {
        Self {
            element: Box::new(element.into()),
            single: false,
        }
    }

    /// Also accept one comma-less string in place of an array, normalized to
    /// a one-element array. Only valid as an alternatives candidate.
    pub fn accept_single(mut self) -> Self {
        self.single = true;
        self
    }

    pub(crate) fn evaluate(&self, value: &Value, path: &str) -> Result<Value, Vec<Violation>> {
        match value {
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    out.push(self.element.evaluate(item, &element(path, i))?);
                }
                Ok(Value::Array(out))
            }
            Value::String(s) if self.single && !s.contains(',') => {
                let only = self.element.evaluate(value, &element(path, 0))?;
                Ok(Value::Array(vec![only]))
            }
            _ => Err(vec![Violation::new(
                path,
                ViolationKind::TypeMismatch,
                "must be an array",
            )]),
        }
    }
}

// ─── Map ─────────────────────────────────────────────────────────────

/// Free-form string-keyed map whose values all satisfy one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRule {
    pub(crate) value: Box<Rule>,
}

impl MapRule {
    /// Map of string keys to `value`.
    pub fn of(value: impl Into<Rule>) -> Self {
        Self {
            value: Box::new(value.into()),
        }
    }

    pub(crate) fn evaluate(&self, value: &Value, path: &str) -> Result<Value, Vec<Violation>> {
        let input = value.as_object().ok_or_else(|| {
            vec![Violation::new(path, ViolationKind::TypeMismatch, "must be an object")]
        })?;

        let mut normalized = Map::new();
        let mut violations = Vec::new();
        for (key, entry) in input {
            match self.value.evaluate(entry, &child(path, key)) {
                Ok(v) => {
                    normalized.insert(key.clone(), v);
                }
                Err(vs) => violations.extend(vs),
            }
        }

        if violations.is_empty() {
            Ok(Value::Object(normalized))
        } else {
            Err(violations)
        }
    }
}

// ─── Alternatives ────────────────────────────────────────────────────

/// Ordered candidate rules. The first candidate that accepts determines the
/// normalized value; when none does, the last candidate's violations are
/// reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlternativesRule {
    pub(crate) candidates: Vec<Rule>,
}

impl AlternativesRule {
    /// No candidates yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate.
    pub fn or(mut self, candidate: impl Into<Rule>) -> Self {
        self.candidates.push(candidate.into());
        self
    }

    pub(crate) fn evaluate(&self, value: &Value, path: &str) -> Result<Value, Vec<Violation>> {
        let mut last = None;
        for candidate in &self.candidates {
            match candidate.evaluate(value, path) {
                Ok(v) => return Ok(v),
                Err(vs) => last = Some(vs),
            }
        }
        Err(last.unwrap_or_else(|| {
            vec![Violation::new(
                path,
                ViolationKind::TypeMismatch,
                "does not match any allowed alternative",
            )]
        }))
    }
}
