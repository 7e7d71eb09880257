//! Route model for the two gated roots.
//!
//! The unauthenticated root holds the login and signup entries; the
//! authenticated root holds the five tabs. `/` belongs to neither and only
//! forwards.

use serde::Serialize;

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;

// =============================================================================
// TABS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Feed,
    Events,
    Map,
    Chat,
    Profile,
}

impl Tab {
    /// Tabs in bar order.
    pub const ALL: [Tab; 5] = [Tab::Feed, Tab::Events, Tab::Map, Tab::Chat, Tab::Profile];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Events => "Events",
            Self::Map => "Map",
            Self::Chat => "Chat",
            Self::Profile => "Profile",
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Feed => "/(tabs)",
            Self::Events => "/(tabs)/events",
            Self::Map => "/(tabs)/map",
            Self::Chat => "/(tabs)/chat",
            Self::Profile => "/(tabs)/profile",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "" | "index" | "feed" => Some(Self::Feed),
            "events" => Some(Self::Events),
            "map" => Some(Self::Map),
            "chat" => Some(Self::Chat),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }
}

// =============================================================================
// ROOTS
// =============================================================================

/// The two mutually exclusive route roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteRoot {
    Unauthenticated,
    Authenticated,
}

impl RouteRoot {
    /// Where a redirect into this root lands.
    #[must_use]
    pub fn entry(self) -> Route {
        match self {
            Self::Unauthenticated => Route::Login,
            Self::Authenticated => Route::Tab(Tab::Feed),
        }
    }
}

// =============================================================================
// ROUTES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Index,
    Login,
    Signup,
    Tab(Tab),
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::Login => "/(auth)/login",
            Self::Signup => "/(auth)/signup",
            Self::Tab(tab) => tab.path(),
        }
    }

    /// Root that owns this route. `None` for the index forwarder.
    #[must_use]
    pub fn root(self) -> Option<RouteRoot> {
        match self {
            Self::Index => None,
            Self::Login | Self::Signup => Some(RouteRoot::Unauthenticated),
            Self::Tab(_) => Some(RouteRoot::Authenticated),
        }
    }

    /// Parse a route path. Group segments are optional, so `/login`,
    /// `/(auth)/login` and `login` are the same route.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_matches('/');
        let mut segments = trimmed.split('/').filter(|s| !s.is_empty());
        let first = segments.next();
        let (group, rest) = match first {
            Some(group @ ("(auth)" | "(tabs)")) => (Some(group), segments.next()),
            other => (None, other),
        };
        if segments.next().is_some() {
            return None;
        }

        match (group, rest) {
            (None, None) => Some(Self::Index),
            (Some("(tabs)"), None) => Some(Self::Tab(Tab::Feed)),
            (Some("(auth)"), None) => Some(Self::Login),
            (Some("(auth)") | None, Some("login")) => Some(Self::Login),
            (Some("(auth)") | None, Some("signup")) => Some(Self::Signup),
            (Some("(tabs)") | None, Some(segment)) => Tab::from_segment(segment).map(Self::Tab),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl std::str::FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown route: {s}"))
    }
}

impl Serialize for Route {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}
