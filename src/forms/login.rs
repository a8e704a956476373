//! Login form validation: both fields are required.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::LoginRequest;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Raw login form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Per-field messages for a rejected login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginFormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    /// Build the login request, or report every empty field.
    ///
    /// # Errors
    ///
    /// Field-level messages; no request is built (and none must be sent)
    /// unless both fields pass.
    pub fn validate(&self) -> Result<LoginRequest, LoginFormErrors> {
        let mut errors = LoginFormErrors::default();
        if self.email.is_empty() {
            errors.email = Some(EMAIL_REQUIRED.to_owned());
        }
        if self.password.is_empty() {
            errors.password = Some(PASSWORD_REQUIRED.to_owned());
        }
        if errors.is_empty() {
            Ok(LoginRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}
