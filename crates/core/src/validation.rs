//! Client-side form checks run before any request leaves the client.

use std::fmt;
use thiserror::Error;

pub const PASSWORD_MIN_LEN: usize = 6;

/// Every message produced by a failed form check, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    #[must_use]
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("; "))
    }
}

/// Constraints applied to a single form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub email: bool,
}

impl FieldRule {
    #[must_use]
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    #[must_use]
    pub fn with_email(mut self) -> Self {
        self.email = true;
        self
    }

    fn check(self, field: &str, value: &str, errors: &mut Vec<String>) {
        if self.required && value.trim().is_empty() {
            errors.push(format!("{field} is required"));
        }
        if let Some(min) = self.min_length
            && !value.is_empty()
            && value.chars().count() < min
        {
            errors.push(format!("{field} must be at least {min} characters"));
        }
        if self.email && !value.is_empty() && !looks_like_email(value) {
            errors.push(format!("{field} must be a valid email"));
        }
    }
}

/// Check `(field, value, rule)` triples, collecting every failure.
///
/// # Errors
///
/// Returns `ValidationErrors` listing each violated rule.
pub fn validate_fields(fields: &[(&str, &str, FieldRule)]) -> Result<(), ValidationErrors> {
    let mut messages = Vec::new();
    for (field, value, rule) in fields {
        rule.check(field, value, &mut messages);
    }
    if messages.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { messages })
    }
}

/// Email and password as typed into the login or register form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `ValidationErrors` for a missing or malformed email or a short password.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&[
            ("email", self.email.as_str(), FieldRule::required().with_email()),
            (
                "password",
                self.password.as_str(),
                FieldRule::required().with_min_length(PASSWORD_MIN_LEN),
            ),
        ])
    }
}

// Same shape as `\S+@\S+\.\S+`: something, an @, something, a dot, something.
fn looks_like_email(value: &str) -> bool {
    value.char_indices().any(|(at, ch)| {
        if ch != '@' || at == 0 {
            return false;
        }
        let local = &value[..at];
        let domain = &value[at + 1..];
        if local.chars().last().is_none_or(char::is_whitespace) {
            return false;
        }
        domain.char_indices().any(|(dot, c)| {
            c == '.'
                && dot > 0
                && !domain[..dot].chars().any(char::is_whitespace)
                && domain[dot + 1..]
                    .chars()
                    .next()
                    .is_some_and(|next| !next.is_whitespace())
        }) && domain.chars().next().is_some_and(|c| !c.is_whitespace())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_credentials() {
        assert!(Credentials::new("ana@example.com", "secret1").validate().is_ok());
    }

    #[test]
    fn collects_every_failure() {
        let err = Credentials::new("", "").validate().unwrap_err();
        assert_eq!(
            err.messages(),
            ["email is required", "password is required"]
        );
    }

    #[test]
    fn rejects_short_password_and_bad_email() {
        let err = Credentials::new("not-an-email", "abc").validate().unwrap_err();
        assert_eq!(
            err.messages(),
            [
                "email must be a valid email",
                "password must be at least 6 characters"
            ]
        );
    }

    #[test]
    fn email_shape_matches_loose_pattern() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("first.last@sub.domain.org"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a@b."));
    }
}
