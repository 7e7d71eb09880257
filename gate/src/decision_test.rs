use super::*;
use crate::route::Tab;

const STATUSES: [AuthStatus; 3] = [AuthStatus::Unknown, AuthStatus::Authenticated, AuthStatus::Unauthenticated];
const KINDS: [SurfaceKind; 3] = [SurfaceKind::Index, SurfaceKind::UnauthenticatedFlow, SurfaceKind::AuthenticatedFlow];

// =============================================================================
// decide
// =============================================================================

#[test]
fn decide_maps_each_status() {
    assert_eq!(decide(AuthStatus::Unknown), RenderDecision::Nothing);
    assert_eq!(decide(AuthStatus::Authenticated), RenderDecision::AuthenticatedRoot);
    assert_eq!(decide(AuthStatus::Unauthenticated), RenderDecision::UnauthenticatedRoot);
}

#[test]
fn decide_is_stable_for_same_status() {
    for status in STATUSES {
        assert_eq!(decide(status), decide(status));
    }
}

// =============================================================================
// surface_view
// =============================================================================

#[test]
fn unknown_status_blanks_every_surface() {
    for kind in KINDS {
        assert_eq!(surface_view(kind, AuthStatus::Unknown), SurfaceView::Blank, "{kind}");
    }
}

#[test]
fn index_always_forwards_once_resolved() {
    assert_eq!(
        surface_view(SurfaceKind::Index, AuthStatus::Authenticated),
        SurfaceView::Redirect(Route::Tab(Tab::Feed))
    );
    assert_eq!(
        surface_view(SurfaceKind::Index, AuthStatus::Unauthenticated),
        SurfaceView::Redirect(Route::Login)
    );
}

#[test]
fn unauthenticated_flow_redirects_signed_in_users_to_tabs() {
    assert_eq!(
        surface_view(SurfaceKind::UnauthenticatedFlow, AuthStatus::Authenticated),
        SurfaceView::Redirect(Route::Tab(Tab::Feed))
    );
    assert_eq!(surface_view(SurfaceKind::UnauthenticatedFlow, AuthStatus::Unauthenticated), SurfaceView::Show);
}

#[test]
fn authenticated_flow_redirects_signed_out_users_to_login() {
    assert_eq!(
        surface_view(SurfaceKind::AuthenticatedFlow, AuthStatus::Unauthenticated),
        SurfaceView::Redirect(Route::Login)
    );
    assert_eq!(surface_view(SurfaceKind::AuthenticatedFlow, AuthStatus::Authenticated), SurfaceView::Show);
}

#[test]
fn exactly_one_flow_shows_for_each_resolved_status() {
    for status in [AuthStatus::Authenticated, AuthStatus::Unauthenticated] {
        let showing = KINDS
            .iter()
            .filter(|kind| surface_view(**kind, status) == SurfaceView::Show)
            .count();
        assert_eq!(showing, 1, "{status}");
    }
}

#[test]
fn redirect_targets_a_surface_that_shows() {
    for status in [AuthStatus::Authenticated, AuthStatus::Unauthenticated] {
        for kind in KINDS {
            if let SurfaceView::Redirect(target) = surface_view(kind, status) {
                let target_kind = SurfaceKind::for_route(target);
                assert_eq!(surface_view(target_kind, status), SurfaceView::Show, "{kind} under {status}");
            }
        }
    }
}

#[test]
fn surface_for_route() {
    assert_eq!(SurfaceKind::for_route(Route::Index), SurfaceKind::Index);
    assert_eq!(SurfaceKind::for_route(Route::Signup), SurfaceKind::UnauthenticatedFlow);
    assert_eq!(SurfaceKind::for_route(Route::Tab(Tab::Chat)), SurfaceKind::AuthenticatedFlow);
}
