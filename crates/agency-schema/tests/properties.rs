//! Property tests over the built-in schemas.

use agency_schema::{Operation, Validator, ViolationKind};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Arbitrary JSON, floats included, a few levels deep.
fn any_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        "[a-zA-Z0-9@._:/ -]{0,30}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(
                prop_oneof![
                    "[a-z]{1,8}".boxed(),
                    prop::sample::select(vec![
                        "email", "password", "title", "rating", "page", "pageSize", "features",
                        "site", "company", "metrics", "featured",
                    ])
                    .prop_map(str::to_string)
                    .boxed(),
                ],
                inner,
                0..6,
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn any_operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::all().to_vec())
}

fn whitespace() -> impl Strategy<Value = String> {
    "[ \t\n]{0,4}"
}

proptest! {
    /// Arbitrary input never panics; a rejection always names at least one problem.
    #[test]
    fn validation_never_panics(op in any_operation(), input in any_json()) {
        if let Err(failure) = Validator::new().validate(op, &input) {
            prop_assert!(!failure.is_empty());
            prop_assert!(!failure.to_string().is_empty());
        }
    }

    /// Anything accepted once is accepted again unchanged.
    #[test]
    fn accepted_values_are_fixed_points(op in any_operation(), input in any_json()) {
        if let Ok(first) = Validator::new().validate(op, &input) {
            let second = Validator::new().validate(op, &first);
            prop_assert_eq!(second.as_ref().ok(), Some(&first), "{} second pass: {:?}", op, second);
        }
    }

    /// Whitespace around a valid email never changes the outcome.
    #[test]
    fn email_padding_is_trimmed(
        local in "[a-z0-9]{1,10}",
        domain in "[a-z]{1,10}",
        before in whitespace(),
        after in whitespace(),
    ) {
        let email = format!("{local}@{domain}.com");
        let padded = json!({ "email": format!("{before}{email}{after}") });
        let plain = json!({ "email": email });
        let v = Validator::new();
        prop_assert_eq!(
            v.validate(Operation::ForgotPassword, &padded).ok(),
            v.validate(Operation::ForgotPassword, &plain).ok()
        );
        prop_assert!(v.validate(Operation::ForgotPassword, &plain).is_ok());
    }

    /// Any in-range rating is accepted as-is; anything else is rejected on `rating`.
    #[test]
    fn rating_bounds(rating in -10i64..20) {
        let input = json!({ "name": "Client", "rating": rating, "content": "Great work" });
        let result = Validator::new().validate(Operation::CreateTestimonial, &input);
        if (1..=5).contains(&rating) {
            let out = result.unwrap_or_else(|f| panic!("rating {rating}: {f}"));
            prop_assert_eq!(&out["rating"], &json!(rating));
        } else {
            let failure = result.unwrap_err();
            prop_assert_eq!(failure.len(), 1);
            prop_assert_eq!(failure.first().path.as_str(), "rating");
        }
    }

    /// Query coercion agrees with integer parsing for page numbers.
    #[test]
    fn query_page_coercion(page in 1u32..10_000) {
        let out = Validator::new()
            .validate_query(Operation::ServiceQuery, &format!("page={page}"))
            .unwrap_or_else(|e| panic!("page {page}: {e}"));
        prop_assert_eq!(&out["page"], &json!(page));
    }

    /// Any integer page is either kept exactly or rejected as out of range.
    #[test]
    fn query_page_never_rounded(page in any::<i64>()) {
        let result = Validator::new().validate(Operation::ServiceQuery, &json!({ "page": page.to_string() }));
        if (1..=i64::from(u32::MAX)).contains(&page) {
            let out = result.unwrap_or_else(|f| panic!("page {page}: {f}"));
            prop_assert_eq!(&out["page"], &json!(page));
        } else {
            let failure = result.unwrap_err();
            prop_assert_eq!(failure.first().kind, ViolationKind::NumericOutOfRange);
        }
    }
}
