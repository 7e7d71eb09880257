use super::*;

#[test]
fn every_route_parses_back_from_its_path() {
    let mut routes = vec![Route::Index, Route::Login, Route::Signup];
    routes.extend(Tab::ALL.iter().map(|tab| Route::Tab(*tab)));
    for route in routes {
        assert_eq!(Route::parse(route.path()), Some(route), "{route}");
    }
}

#[test]
fn short_links_resolve_inside_their_group() {
    assert_eq!(Route::parse("/login"), Some(Route::Login));
    assert_eq!(Route::parse("/signup"), Some(Route::Signup));
    assert_eq!(Route::parse("profile"), Some(Route::Tab(Tab::Profile)));
    assert_eq!(Route::parse("/(auth)"), Some(Route::Login));
}

#[test]
fn cross_group_and_unknown_paths_are_rejected() {
    assert_eq!(Route::parse("/(auth)/events"), None);
    assert_eq!(Route::parse("/(tabs)/login"), None);
    assert_eq!(Route::parse("/settings"), None);
    assert_eq!(Route::parse("/(tabs)/chat/extra"), None);
}

#[test]
fn roots_and_entries() {
    assert_eq!(Route::Index.root(), None);
    assert_eq!(Route::Signup.root(), Some(RouteRoot::Unauthenticated));
    assert_eq!(Route::Tab(Tab::Map).root(), Some(RouteRoot::Authenticated));
    assert_eq!(RouteRoot::Unauthenticated.entry(), Route::Login);
    assert_eq!(RouteRoot::Authenticated.entry(), Route::Tab(Tab::Feed));
}

#[test]
fn entries_belong_to_their_root() {
    for root in [RouteRoot::Unauthenticated, RouteRoot::Authenticated] {
        assert_eq!(root.entry().root(), Some(root));
    }
}

#[test]
fn from_str_reports_unknown_route() {
    let err = "/nowhere".parse::<Route>().unwrap_err();
    assert!(err.contains("/nowhere"));
    assert_eq!("/(tabs)/map".parse::<Route>(), Ok(Route::Tab(Tab::Map)));
}

#[test]
fn tab_titles_in_bar_order() {
    let titles: Vec<&str> = Tab::ALL.iter().map(|tab| tab.title()).collect();
    assert_eq!(titles, ["Feed", "Events", "Map", "Chat", "Profile"]);
}

#[test]
fn route_serializes_as_path() {
    assert_eq!(serde_json::to_string(&Route::Login).unwrap(), "\"/(auth)/login\"");
}
