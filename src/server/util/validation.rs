//! Declarative request field validation.
//!
//! A `Validator` walks the fields of a request, records a `FieldViolation` for each
//! rule that fails and finally yields either `Ok(())` or every violation at once, so
//! clients can fix a form in a single round trip.

use url::Url;

use crate::server::error::validation::{FieldViolation, ValidationErrors};

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 50;
pub const USERNAME_MIN_LEN: usize = 4;
pub const USERNAME_MAX_LEN: usize = 30;
pub const PHONE_DIGITS: usize = 10;
pub const SUBJECT_MAX_LEN: usize = 100;

const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+{}[]:;<>,.?~\\/-";

#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation on `field` unless `valid` holds.
    pub fn check(&mut self, field: impl Into<String>, valid: bool, message: &str) -> &mut Self {
        if !valid {
            self.violations.push(FieldViolation {
                field: field.into(),
                message: message.to_string(),
            });
        }
        self
    }

    /// Letters and spaces only, between 3 and 50 characters.
    pub fn name(&mut self, field: &str, value: &str) -> &mut Self {
        self.check(
            field,
            is_valid_name(value),
            "The name must contain only letters and spaces, and be between 3 and 50 characters.",
        )
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        self.check(field, is_valid_email(value), "The e-mail is invalid.")
    }

    pub fn phone(&mut self, field: &str, value: &str) -> &mut Self {
        self.check(field, is_valid_phone(value), "The phone is invalid.")
    }

    pub fn username(&mut self, field: &str, value: &str) -> &mut Self {
        self.check(field, is_valid_username(value), "The username is invalid.")
    }

    pub fn password(&mut self, field: &str, value: &str) -> &mut Self {
        self.check(
            field,
            is_valid_password(value),
            "The password must contain at least one capital letter, one special character and one number.",
        )
    }

    /// Absolute `http` or `https` URL.
    pub fn link(&mut self, field: &str, value: &str) -> &mut Self {
        self.check(field, is_valid_link(value), "The link must be an http or https URL.")
    }

    /// Consumes the validator.
    ///
    /// # Returns
    /// - `Ok(())` - No rule failed
    /// - `Err(ValidationErrors)` - Every recorded violation in check order
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.violations))
        }
    }
}

pub fn is_valid_name(value: &str) -> bool {
    let len = value.chars().count();
    (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len)
        && value.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Mirrors `^[^\s@]+@[^\s@]+\.[^\s@]+$`: one `@`, and a dot in the domain with
/// text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

pub fn is_valid_phone(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_username(value: &str) -> bool {
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&value.len())
        && value.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// At least one uppercase letter, one special character and one digit.
pub fn is_valid_password(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
        && value.chars().any(|c| c.is_ascii_digit())
}

pub fn is_valid_link(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}
