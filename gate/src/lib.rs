//! Session-gated navigation core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every top-level surface of the app is gated on authentication. A surface
//! mounts a [`SessionGate`], which resolves the auth status once from the
//! identity provider and then follows its change notifications. What the
//! surface shows is decided by [`surface_view`], the single authority shared
//! by all surfaces, so the login flow and the tab flow can never disagree
//! about where the user belongs.

pub mod actions;
pub mod decision;
pub mod error;
pub mod gate;
pub mod route;
pub mod status;

pub use actions::{SIGN_UP_SUCCESS_MESSAGE, SignUpForm, SignUpOutcome};
pub use decision::{RenderDecision, SurfaceKind, SurfaceView, decide, surface_view};
pub use error::ActionError;
pub use gate::SessionGate;
pub use route::{Route, RouteRoot, Tab};
pub use status::{AuthState, AuthStatus};
