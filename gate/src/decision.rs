//! The shared render decision.
//!
//! DESIGN
//! ======
//! Gating is decided in exactly one place. Each surface declares which root
//! it serves and [`surface_view`] tells it whether to render nothing, render
//! itself, or redirect to the other root's entry. Surfaces never inspect the
//! status themselves.

use crate::route::{Route, RouteRoot};
use crate::status::AuthStatus;

#[cfg(test)]
#[path = "decision_test.rs"]
mod tests;

/// What the current status permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderDecision {
    /// No session check has completed; render nothing.
    Nothing,
    AuthenticatedRoot,
    UnauthenticatedRoot,
}

impl RenderDecision {
    #[must_use]
    pub fn root(self) -> Option<RouteRoot> {
        match self {
            Self::Nothing => None,
            Self::AuthenticatedRoot => Some(RouteRoot::Authenticated),
            Self::UnauthenticatedRoot => Some(RouteRoot::Unauthenticated),
        }
    }
}

/// Pure map from status to render decision.
#[must_use]
pub fn decide(status: AuthStatus) -> RenderDecision {
    match status {
        AuthStatus::Unknown => RenderDecision::Nothing,
        AuthStatus::Authenticated => RenderDecision::AuthenticatedRoot,
        AuthStatus::Unauthenticated => RenderDecision::UnauthenticatedRoot,
    }
}

/// Kind of gated surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// App entry point; never renders content, only forwards.
    Index,
    /// Login / signup stack.
    UnauthenticatedFlow,
    /// Tab bar.
    AuthenticatedFlow,
}

impl SurfaceKind {
    /// Root this surface renders, if any.
    #[must_use]
    pub fn root(self) -> Option<RouteRoot> {
        match self {
            Self::Index => None,
            Self::UnauthenticatedFlow => Some(RouteRoot::Unauthenticated),
            Self::AuthenticatedFlow => Some(RouteRoot::Authenticated),
        }
    }

    /// Surface responsible for `route`.
    #[must_use]
    pub fn for_route(route: Route) -> Self {
        match route.root() {
            None => Self::Index,
            Some(RouteRoot::Unauthenticated) => Self::UnauthenticatedFlow,
            Some(RouteRoot::Authenticated) => Self::AuthenticatedFlow,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::UnauthenticatedFlow => "unauthenticated-flow",
            Self::AuthenticatedFlow => "authenticated-flow",
        }
    }
}

impl std::fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a surface does on render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceView {
    /// Status unresolved; render nothing.
    Blank,
    /// Status matches this surface's root; render it.
    Show,
    /// Status contradicts this surface; replace it with `Route`.
    Redirect(Route),
}

/// Single gating authority consumed by every surface.
#[must_use]
pub fn surface_view(kind: SurfaceKind, status: AuthStatus) -> SurfaceView {
    let Some(permitted) = decide(status).root() else {
        return SurfaceView::Blank;
    };
    if kind.root() == Some(permitted) {
        SurfaceView::Show
    } else {
        SurfaceView::Redirect(permitted.entry())
    }
}
