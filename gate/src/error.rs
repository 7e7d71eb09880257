//! Errors from explicit auth actions.
//!
//! These are the only errors a person ever sees. Passive session sync never
//! produces one; a failed `initialize` just leaves the gate unresolved.

use identity::IdentityError;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Sign-up confirmation field differs from the password.
    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error(transparent)]
    Provider(#[from] IdentityError),
}

impl ActionError {
    /// Text for the alert shown after a failed action.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::PasswordMismatch => self.to_string(),
            Self::Provider(err) => err.user_message(),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
