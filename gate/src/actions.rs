//! Inputs and outcomes of the explicit auth actions.

use identity::ProfileAttributes;

use crate::error::ActionError;

#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

pub const SIGN_UP_SUCCESS_MESSAGE: &str = "Account created! Check your email to confirm (if enabled).";

/// The signup screen's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl SignUpForm {
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            confirm: confirm.into(),
        }
    }

    /// Local checks run before the provider is contacted.
    ///
    /// # Errors
    ///
    /// [`ActionError::PasswordMismatch`] when the confirmation differs.
    pub fn validate(&self) -> Result<(), ActionError> {
        if self.password != self.confirm {
            return Err(ActionError::PasswordMismatch);
        }
        Ok(())
    }

    /// Profile attributes sent with the sign-up request. A blank name is
    /// omitted.
    #[must_use]
    pub fn attributes(&self) -> ProfileAttributes {
        let name = self.full_name.trim();
        if name.is_empty() {
            ProfileAttributes::default()
        } else {
            ProfileAttributes::with_full_name(name)
        }
    }
}

/// Result of a successful sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpOutcome {
    /// False while email confirmation is pending.
    pub session_issued: bool,
}

impl SignUpOutcome {
    #[must_use]
    pub fn message(self) -> &'static str {
        SIGN_UP_SUCCESS_MESSAGE
    }
}
