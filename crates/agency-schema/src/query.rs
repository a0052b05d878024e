//! # Raw Query Strings
//!
//! Turns `page=2&search=brand+strategy` into a JSON object of string values
//! that the list-query schemas coerce.
//!
//! - `+` decodes to a space, then percent-escapes are decoded.
//! - A key without `=` maps to the empty string.
//! - The last occurrence of a repeated key wins.
//! - Empty segments and empty keys are skipped.
//! - A leading `?` is ignored.

use serde_json::{Map, Value};

use agency_core::AgencyError;

/// Parse `raw` into an object of string values.
///
/// # Errors
///
/// Returns [`AgencyError::Query`] when a key or value decodes to invalid
/// UTF-8.
pub fn parse_query(raw: &str) -> Result<Value, AgencyError> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut params = Map::new();

    for segment in raw.split('&').filter(|s| !s.is_empty()) {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        let key = decode(key)?;
        if key.is_empty() {
            continue;
        }
        params.insert(key, Value::String(decode(value)?));
    }

    Ok(Value::Object(params))
}

fn decode(component: &str) -> Result<String, AgencyError> {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| AgencyError::Query(format!("cannot decode {component:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_pairs() {
        let parsed = parse_query("page=2&pageSize=20").unwrap();
        assert_eq!(parsed, json!({ "page": "2", "pageSize": "20" }));
    }

    #[test]
    fn test_plus_and_percent_decoding() {
        let parsed = parse_query("?search=brand+strategy%20%26%20design").unwrap();
        assert_eq!(parsed["search"], "brand strategy & design");
    }

    #[test]
    fn test_literal_plus_survives_when_escaped() {
        let parsed = parse_query("search=c%2B%2B").unwrap();
        assert_eq!(parsed["search"], "c++");
    }

    #[test]
    fn test_bare_key_and_repeats() {
        let parsed = parse_query("featured&sort=title&sort=createdAt").unwrap();
        assert_eq!(parsed, json!({ "featured": "", "sort": "createdAt" }));
    }

    #[test]
    fn test_empty_segments_skipped() {
        assert_eq!(parse_query("").unwrap(), json!({}));
        assert_eq!(parse_query("&&=x&page=1&").unwrap(), json!({ "page": "1" }));
    }

    #[test]
    fn test_invalid_utf8_is_query_error() {
        match parse_query("search=%FF") {
            Err(AgencyError::Query(msg)) => assert!(msg.contains("%FF")),
            other => panic!("Expected Query error, got: {other:?}"),
        }
    }
}
