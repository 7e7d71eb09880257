//! Auth status of one gated surface.

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;

use serde::Serialize;

/// Tri-state authentication status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    /// No session check has completed yet.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    #[must_use]
    pub fn from_session_present(has_session: bool) -> Self {
        if has_session { Self::Authenticated } else { Self::Unauthenticated }
    }

    #[must_use]
    pub fn is_resolved(self) -> bool {
        self != Self::Unknown
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Authenticated => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}

impl std::fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auth state held by a gate.
///
/// The only write is [`AuthState::resolve`], which can never produce
/// `Unknown`; once resolved the state only flips between the two resolved
/// values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthState {
    status: AuthStatus,
}

impl AuthState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.status
    }

    /// Apply a session observation. Returns whether the status changed.
    pub fn resolve(&mut self, has_session: bool) -> bool {
        let next = AuthStatus::from_session_present(has_session);
        let changed = self.status != next;
        self.status = next;
        changed
    }
}
