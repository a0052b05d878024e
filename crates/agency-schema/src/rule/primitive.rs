//! # Primitive Rules
//!
//! Leaf evaluators for strings, numbers, booleans, and allow-lists. A
//! primitive rule never faults on bad input: it returns the normalized value
//! or exactly one [`Violation`] for the first check that failed.
//!
//! Check order is fixed per rule kind:
//!
//! - string: type, transforms (`trim`, then `lowercase`), emptiness,
//!   max length, min length, format
//! - number: type (with optional string coercion), integer-ness, min, max
//! - boolean: native boolean, then the string allow-list when enabled
//! - enum: exact membership

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Number, Value};

use agency_core::{Violation, ViolationKind};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static URI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:https?)://\S+$").expect("uri pattern compiles"));

/// String values accepted by a boolean rule that allows string equivalents.
pub const BOOLEAN_STRINGS: [(&str, bool); 4] =
    [("true", true), ("false", false), ("1", true), ("0", false)];

/// Declared string format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `local@domain.tld` shape.
    Email,
    /// `http` or `https` scheme with a non-empty remainder.
    Uri,
}

impl Format {
    fn matches(&self, s: &str) -> bool {
        match self {
            Format::Email => EMAIL_PATTERN.is_match(s),
            Format::Uri => URI_PATTERN.is_match(s),
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Format::Email => "must be a valid email address",
            Format::Uri => "must be a valid http or https URI",
        }
    }
}

// ─── String ──────────────────────────────────────────────────────────

/// Rule for string-typed input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringRule {
    pub(crate) trim: bool,
    pub(crate) lowercase: bool,
    pub(crate) allow_empty: bool,
    pub(crate) min_len: Option<usize>,
    pub(crate) max_len: Option<usize>,
    pub(crate) format: Option<Format>,
}

impl StringRule {
    /// A string rule with no transforms or constraints. Empty strings are
    /// rejected unless [`allow_empty`](Self::allow_empty) is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip leading and trailing whitespace before any check.
    pub fn trim(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Case-fold before any check (applied after `trim`).
    pub fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }

    /// Accept the empty string as a value.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Minimum length in characters.
    pub fn min_len(mut self, min: usize) -> Self {
        self.min_len = Some(min);
        self
    }

    /// Maximum length in characters.
    pub fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    /// Require an email address.
    pub fn email(mut self) -> Self {
        self.format = Some(Format::Email);
        self
    }

    /// Require an http(s) URI.
    pub fn uri(mut self) -> Self {
        self.format = Some(Format::Uri);
        self
    }

    pub(crate) fn evaluate(&self, value: &Value, path: &str) -> Result<Value, Violation> {
        let raw = value
            .as_str()
            .ok_or_else(|| Violation::new(path, ViolationKind::TypeMismatch, "must be a string"))?;

        let mut s = if self.trim { raw.trim() } else { raw }.to_string();
        if self.lowercase {
            s = s.to_lowercase();
        }

        if s.is_empty() {
            return if self.allow_empty {
                Ok(Value::String(s))
            } else {
                Err(Violation::new(
                    path,
                    ViolationKind::MissingRequiredField,
                    "is not allowed to be empty",
                ))
            };
        }

        let len = s.chars().count();
        if let Some(max) = self.max_len {
            if len > max {
                return Err(Violation::new(
                    path,
                    ViolationKind::LengthOutOfRange,
                    format!("length must be at most {max} characters"),
                ));
            }
        }
        if let Some(min) = self.min_len {
            if len < min {
                return Err(Violation::new(
                    path,
                    ViolationKind::LengthOutOfRange,
                    format!("length must be at least {min} characters"),
                ));
            }
        }

        if let Some(format) = self.format {
            if !format.matches(&s) {
                return Err(Violation::new(path, ViolationKind::PatternMismatch, format.message()));
            }
        }

        Ok(Value::String(s))
    }
}

// ─── Number ──────────────────────────────────────────────────────────

/// Rule for numeric input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberRule {
    pub(crate) integer: bool,
    pub(crate) coerce: bool,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
}

impl NumberRule {
    /// Any finite number.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `NumberRule::new().integer()`.
    pub fn int() -> Self {
        Self::new().integer()
    }

    /// Require a whole number.
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Accept numeric-looking strings (`"2"`, `" 10 "`).
    pub fn coerce(mut self) -> Self {
        self.coerce = true;
        self
    }

    /// Inclusive minimum.
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Inclusive maximum.
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub(crate) fn evaluate(&self, value: &Value, path: &str) -> Result<Value, Violation> {
        if self.integer {
            return self.evaluate_integer(value, path);
        }

        let (n, coerced) = match value {
            Value::Number(num) => (num.as_f64().ok_or_else(|| type_mismatch(path))?, false),
            Value::String(s) if self.coerce => (parse_finite(s, path)?, true),
            _ => return Err(type_mismatch(path)),
        };

        if let Some(min) = self.min {
            if n < min {
                return Err(below(path, min));
            }
        }
        if let Some(max) = self.max {
            if n > max {
                return Err(above(path, max));
            }
        }

        if !coerced {
            return Ok(value.clone());
        }
        if n.fract() == 0.0 && n.abs() < MAX_EXACT_FLOAT_INT {
            return Ok(Value::from(n as i64));
        }
        Number::from_f64(n)
            .map(Value::Number)
            .ok_or_else(|| type_mismatch(path))
    }

    /// Integers are read without a round trip through `f64`, so every `i64`
    /// survives exactly. Values outside `i64` are out of range.
    fn evaluate_integer(&self, value: &Value, path: &str) -> Result<Value, Violation> {
        let n: i128 = match value {
            Value::Number(num) => {
                if let Some(i) = num.as_i64() {
                    i.into()
                } else if let Some(u) = num.as_u64() {
                    u.into()
                } else {
                    whole(num.as_f64().ok_or_else(|| type_mismatch(path))?, path)?
                }
            }
            Value::String(s) if self.coerce => match s.trim().parse::<i64>() {
                Ok(i) => i.into(),
                Err(_) => whole(parse_finite(s, path)?, path)?,
            },
            _ => return Err(type_mismatch(path)),
        };

        if let Some(min) = self.min {
            if n < min.ceil() as i128 {
                return Err(below(path, min));
            }
        }
        if let Some(max) = self.max {
            if n > max.floor() as i128 {
                return Err(above(path, max));
            }
        }

        i64::try_from(n).map(Value::from).map_err(|_| {
            Violation::new(
                path,
                ViolationKind::NumericOutOfRange,
                format!("must be between {} and {}", i64::MIN, i64::MAX),
            )
        })
    }
}

/// Whole floats below this magnitude convert to `i64` exactly.
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

fn type_mismatch(path: &str) -> Violation {
    Violation::new(path, ViolationKind::TypeMismatch, "must be a number")
}

fn below(path: &str, min: f64) -> Violation {
    Violation::new(
        path,
        ViolationKind::NumericOutOfRange,
        format!("must be greater than or equal to {min}"),
    )
}

fn above(path: &str, max: f64) -> Violation {
    Violation::new(
        path,
        ViolationKind::NumericOutOfRange,
        format!("must be less than or equal to {max}"),
    )
}

fn parse_finite(s: &str, path: &str) -> Result<f64, Violation> {
    match s.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(type_mismatch(path)),
    }
}

/// A fractional value fails the integer check as `NumericOutOfRange`.
fn whole(n: f64, path: &str) -> Result<i128, Violation> {
    if n.fract() != 0.0 {
        return Err(Violation::new(
            path,
            ViolationKind::NumericOutOfRange,
            "must be an integer",
        ));
    }
    Ok(n as i128)
}

// ─── Boolean ─────────────────────────────────────────────────────────

/// Rule for boolean input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooleanRule {
    pub(crate) accept_strings: bool,
}

impl BooleanRule {
    /// Native booleans only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also accept `"true"`, `"false"`, `"1"`, `"0"`, normalized to booleans.
    pub fn accept_strings(mut self) -> Self {
        self.accept_strings = true;
        self
    }

    pub(crate) fn evaluate(&self, value: &Value, path: &str) -> Result<Value, Violation> {
        match value {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            Value::String(s) if self.accept_strings => BOOLEAN_STRINGS
                .iter()
                .find(|(text, _)| *text == s)
                .map(|(_, b)| Value::Bool(*b))
                .ok_or_else(|| {
                    Violation::new(path, ViolationKind::TypeMismatch, "must be a boolean")
                }),
            _ => Err(Violation::new(path, ViolationKind::TypeMismatch, "must be a boolean")),
        }
    }
}

// ─── Enum ────────────────────────────────────────────────────────────

/// Rule admitting only values from a fixed allow-list (case-sensitive).
#[derive(Debug, Clone, PartialEq)]
pub struct EnumRule {
    pub(crate) allowed: Vec<Value>,
}

impl EnumRule {
    /// Allow exactly the given values.
    pub fn of<I, V>(allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn evaluate(&self, value: &Value, path: &str) -> Result<Value, Violation> {
        if self.allowed.contains(value) {
            return Ok(value.clone());
        }
        let listed: Vec<String> = self.allowed.iter().map(Value::to_string).collect();
        Err(Violation::new(
            path,
            ViolationKind::EnumNotAllowed,
            format!("must be one of [{}]", listed.join(", ")),
        ))
    }
}
