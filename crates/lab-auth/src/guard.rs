//! Route gating by authentication state.

use serde::Serialize;

/// Views the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Login,
    Networking,
    Profile,
}

impl Route {
    /// Profile and search views need a signed-in user.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Networking | Self::Profile)
    }
}

/// Where a navigation to `requested` actually lands.
///
/// Protected routes redirect to `Login` while signed out; `Login` redirects
/// to `Profile` once signed in.
#[must_use]
pub const fn guard(requested: Route, is_authenticated: bool) -> Route {
    match requested {
        Route::Login if is_authenticated => Route::Profile,
        route if route.requires_auth() && !is_authenticated => Route::Login,
        route => route,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Route::Profile, false, Route::Login)]
    #[case(Route::Networking, false, Route::Login)]
    #[case(Route::Home, false, Route::Home)]
    #[case(Route::Login, false, Route::Login)]
    #[case(Route::Profile, true, Route::Profile)]
    #[case(Route::Networking, true, Route::Networking)]
    #[case(Route::Login, true, Route::Profile)]
    #[case(Route::Home, true, Route::Home)]
    fn guard_redirects(#[case] requested: Route, #[case] authed: bool, #[case] expected: Route) {
        assert_eq!(guard(requested, authed), expected);
    }
}
