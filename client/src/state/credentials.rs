//! Local validation of login and signup form input.
//!
//! Both the pages and `SessionStore` run these checks; the store refuses to
//! call the backend with input that fails them.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::types::{LoginCredentials, SignupRequest};

/// A form field that can fail validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Password confirmation",
        }
    }
}

/// Input rejected before any backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required.", .0.label())]
    EmptyField(Field),
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

fn required_trimmed(value: &str, field: Field) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_owned())
}

fn required_secret(value: &str, field: Field) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value.to_owned())
}

/// Validate login input. Email is trimmed; the password is kept verbatim.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] for the first empty field.
pub fn validate_login(email: &str, password: &str) -> Result<LoginCredentials, ValidationError> {
    let email = required_trimmed(email, Field::Email)?;
    let password = required_secret(password, Field::Password)?;
    Ok(LoginCredentials { email, password })
}

/// Validate signup input. Name and email are trimmed; passwords are compared
/// verbatim.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] for the first empty field, then
/// [`ValidationError::PasswordMismatch`] when the confirmation differs.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<SignupRequest, ValidationError> {
    let name = required_trimmed(name, Field::Name)?;
    let email = required_trimmed(email, Field::Email)?;
    let password = required_secret(password, Field::Password)?;
    required_secret(confirm_password, Field::ConfirmPassword)?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(SignupRequest { name, email, password })
}
