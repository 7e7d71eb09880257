//! Session gate: the per-surface auth state machine.
//!
//! DESIGN
//! ======
//! A gate is created when a gated surface mounts and dropped when it
//! unmounts. Its status lives in a `watch` channel owned by the gate, so the
//! most recent write wins whether it came from [`SessionGate::initialize`] or
//! from a provider notification, and observers always read the latest value.
//!
//! The provider listener holds only a `Weak` reference to that channel, and
//! the subscription handle is released synchronously on drop. A notification
//! delivered after unmount therefore has nothing to write to.
//!
//! Passive sync never surfaces errors: a failed or pending session query
//! leaves the gate `Unknown`, which renders nothing. Explicit actions return
//! [`ActionError`] for the surface to show.

use std::sync::Arc;

use identity::{AuthChangeEvent, IdentityProvider, Session, SessionListener, Subscription};
use tokio::sync::watch;
use uuid::Uuid;

use crate::actions::{SignUpForm, SignUpOutcome};
use crate::decision::{self, RenderDecision, SurfaceKind, SurfaceView};
use crate::error::ActionError;
use crate::route::{Route, RouteRoot};
use crate::status::{AuthState, AuthStatus};

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;

pub struct SessionGate {
    id: Uuid,
    kind: SurfaceKind,
    provider: Arc<dyn IdentityProvider>,
    status: Arc<watch::Sender<AuthState>>,
    subscription: Option<Subscription>,
}

impl SessionGate {
    /// Create the gate for a surface that just mounted. Status starts
    /// `Unknown`; call [`initialize`](Self::initialize) and
    /// [`subscribe`](Self::subscribe) to resolve it.
    #[must_use]
    pub fn mount(provider: Arc<dyn IdentityProvider>, kind: SurfaceKind) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(gate = %id, %kind, "gate mounted");
        Self {
            id,
            kind,
            provider,
            status: Arc::new(watch::Sender::new(AuthState::new())),
            subscription: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Query the provider once for the current session.
    ///
    /// Provider failure is logged and leaves the status where it was. There
    /// is no timeout; a query that never completes keeps the gate blank.
    pub async fn initialize(&self) -> AuthStatus {
        match self.provider.current_session().await {
            Ok(session) => {
                self.apply(session.is_some());
                tracing::debug!(gate = %self.id, kind = %self.kind, status = %self.status(), "gate initialized");
            }
            Err(err) => {
                tracing::warn!(gate = %self.id, kind = %self.kind, error = %err, "session check failed");
            }
        }
        self.status()
    }

    /// Follow provider session changes for the life of this gate.
    ///
    /// Each notification resolves the status from session presence, then
    /// calls `on_change` with the new status. Only the first call registers a
    /// listener; later calls return `false` and drop their hook.
    pub fn subscribe<F>(&mut self, on_change: F) -> bool
    where
        F: Fn(AuthStatus) + Send + Sync + 'static,
    {
        if self.subscription.is_some() {
            return false;
        }

        let target = Arc::downgrade(&self.status);
        let gate = self.id;
        let kind = self.kind;
        let listener: SessionListener = Box::new(move |event: AuthChangeEvent, session: Option<&Session>| {
            let Some(status) = target.upgrade() else {
                return;
            };
            let present = session.is_some();
            status.send_if_modified(|state| state.resolve(present));
            let current = status.borrow().status();
            tracing::debug!(%gate, %kind, %event, status = %current, "session change");
            on_change(current);
        });
        self.subscription = Some(self.provider.on_session_change(listener));
        true
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.status.borrow().status()
    }

    /// Receiver that observes every status write.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<AuthState> {
        self.status.subscribe()
    }

    #[must_use]
    pub fn decide(&self) -> RenderDecision {
        decision::decide(self.status())
    }

    /// What this surface should do right now.
    #[must_use]
    pub fn view(&self) -> SurfaceView {
        decision::surface_view(self.kind, self.status())
    }

    fn apply(&self, has_session: bool) {
        self.status.send_if_modified(|state| state.resolve(has_session));
    }

    /// Resolve this surface to `Unauthenticated` after a sign-out made on a
    /// sibling surface. Asks nothing of the provider.
    pub fn force_signed_out(&self) {
        self.apply(false);
        tracing::debug!(gate = %self.id, kind = %self.kind, "forced signed out");
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Sign in with email and password. Navigation follows from the
    /// provider's change notification.
    ///
    /// # Errors
    ///
    /// The provider's rejection, wrapped for display. Status is untouched.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), ActionError> {
        match self.provider.sign_in_with_password(email.trim(), password).await {
            Ok(session) => {
                tracing::info!(gate = %self.id, user_id = %session.user.id, "signed in");
                Ok(())
            }
            Err(err) => {
                tracing::info!(gate = %self.id, error = %err, "sign-in rejected");
                Err(err.into())
            }
        }
    }

    /// Create an account from the signup form.
    ///
    /// # Errors
    ///
    /// [`ActionError::PasswordMismatch`] before any provider call, or the
    /// provider's rejection.
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<SignUpOutcome, ActionError> {
        form.validate()?;
        let session = self
            .provider
            .sign_up(form.email.trim(), &form.password, &form.attributes())
            .await
            .inspect_err(|err| tracing::info!(gate = %self.id, error = %err, "sign-up rejected"))?;
        let outcome = SignUpOutcome { session_issued: session.is_some() };
        tracing::info!(gate = %self.id, session_issued = outcome.session_issued, "account created");
        Ok(outcome)
    }

    /// Sign out and return the route the caller must replace the current one
    /// with.
    ///
    /// On success the status is forced to `Unauthenticated` before returning,
    /// without waiting for the provider's notification.
    ///
    /// # Errors
    ///
    /// The provider's failure. Status is untouched.
    pub async fn sign_out(&self) -> Result<Route, ActionError> {
        if let Err(err) = self.provider.sign_out().await {
            tracing::warn!(gate = %self.id, error = %err, "sign-out failed");
            return Err(err.into());
        }
        self.apply(false);
        tracing::info!(gate = %self.id, "signed out");
        Ok(RouteRoot::Unauthenticated.entry())
    }

    /// Email of the signed-in account, for the profile tab. Lookup failures
    /// are logged and read as no user.
    pub async fn current_user_email(&self) -> Option<String> {
        match self.provider.current_user().await {
            Ok(user) => user.and_then(|user| user.email),
            Err(err) => {
                tracing::warn!(gate = %self.id, error = %err, "user lookup failed");
                None
            }
        }
    }

    /// Release the subscription and discard the gate.
    pub fn unmount(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        tracing::debug!(gate = %self.id, kind = %self.kind, "gate unmounted");
    }
}

impl std::fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGate")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("status", &self.status())
            .field("subscribed", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}
