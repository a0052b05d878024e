//! Authentication payloads: login, registration, password reset, token refresh.
//!
//! Credential payloads are strict: an undeclared key is reported rather
//! than silently dropped.

use agency_core::ViolationKind;

use crate::rule::{BooleanRule, Field, ObjectRule, ReferenceRule, StringRule};

use super::text;

const PASSWORD_MIN: usize = 8;
const NAME_MAX: usize = 50;

fn email() -> Field {
    Field::new("email", StringRule::new().trim().lowercase().email())
        .required()
        .message(ViolationKind::MissingRequiredField, "Email is required")
        .message(ViolationKind::PatternMismatch, "Please provide a valid email address")
}

fn password(min: Option<usize>) -> Field {
    let rule = match min {
        Some(min) => StringRule::new().min_len(min),
        None => StringRule::new(),
    };
    Field::new("password", rule)
        .required()
        .message(ViolationKind::MissingRequiredField, "Password is required")
        .message(
            ViolationKind::LengthOutOfRange,
            format!("Password must be at least {PASSWORD_MIN} characters long"),
        )
}

fn confirm_password() -> Field {
    Field::new("confirmPassword", ReferenceRule::new("password", StringRule::new()))
        .required()
        .message(ViolationKind::MissingRequiredField, "Please confirm your password")
}

fn person_name(name: &str) -> Field {
    Field::new(name, text().max_len(NAME_MAX)).required()
}

/// `login`: email, password, rememberMe.
pub fn login() -> ObjectRule {
    ObjectRule::new()
        .field(email())
        .field(password(None))
        .field(Field::new("rememberMe", BooleanRule::new()).with_default(false))
        .strict()
}

/// `register`: email, password, confirmPassword, firstName, lastName.
pub fn register() -> ObjectRule {
    ObjectRule::new()
        .field(email())
        .field(password(Some(PASSWORD_MIN)))
        .field(confirm_password())
        .field(person_name("firstName"))
        .field(person_name("lastName"))
        .strict()
}

/// `forgotPassword`: email.
pub fn forgot_password() -> ObjectRule {
    ObjectRule::new().field(email()).strict()
}

/// `resetPassword`: token, password, confirmPassword.
pub fn reset_password() -> ObjectRule {
    ObjectRule::new()
        .field(
            Field::new("token", StringRule::new())
                .required()
                .message(ViolationKind::MissingRequiredField, "Reset token is required"),
        )
        .field(password(Some(PASSWORD_MIN)))
        .field(confirm_password())
        .strict()
}

/// `refreshToken`: refreshToken.
pub fn refresh_token() -> ObjectRule {
    ObjectRule::new()
        .field(
            Field::new("refreshToken", StringRule::new())
                .required()
                .message(ViolationKind::MissingRequiredField, "Refresh token is required"),
        )
        .strict()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_normalizes_email_and_defaults_remember_me() {
        let out = login()
            .evaluate(&json!({ "email": " Ada@Example.com ", "password": "x" }), "")
            .unwrap();
        assert_eq!(
            out,
            json!({ "email": "ada@example.com", "password": "x", "rememberMe": false })
        );
    }

    #[test]
    fn test_login_rejects_unknown_keys() {
        let errs = login()
            .evaluate(&json!({ "email": "a@b.com", "password": "x", "admin": true }), "")
            .unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "admin");
        assert_eq!(errs[0].kind, ViolationKind::UnknownField);
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let out = login()
            .evaluate(&json!({ "email": "a@b.com", "password": " secret " }), "")
            .unwrap();
        assert_eq!(out["password"], " secret ");
    }

    #[test]
    fn test_register_custom_messages() {
        let errs = register()
            .evaluate(
                &json!({
                    "email": "nope",
                    "password": "short",
                    "confirmPassword": "short",
                    "firstName": "Ada",
                    "lastName": "Lovelace"
                }),
                "",
            )
            .unwrap_err();
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].message, "Please provide a valid email address");
        assert_eq!(errs[1].message, "Password must be at least 8 characters long");
    }

    #[test]
    fn test_register_name_length() {
        let long = "x".repeat(NAME_MAX + 1);
        let errs = register()
            .evaluate(
                &json!({
                    "email": "a@b.com",
                    "password": "Password1",
                    "confirmPassword": "Password1",
                    "firstName": long,
                    "lastName": "  Lovelace  "
                }),
                "",
            )
            .unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "firstName");
        assert_eq!(errs[0].kind, ViolationKind::LengthOutOfRange);
    }

    #[test]
    fn test_reset_password_mismatch() {
        let errs = reset_password()
            .evaluate(
                &json!({ "token": "t", "password": "Password1", "confirmPassword": "Password2" }),
                "",
            )
            .unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "confirmPassword");
        assert_eq!(errs[0].kind, ViolationKind::CrossFieldMismatch);
    }
}
