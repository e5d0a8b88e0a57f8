//! Route table and session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route is either `Open` (login, register) or `Guarded`. A guarded
//! route renders only while the session holds a token; otherwise it
//! redirects to `/login`. The decision is recomputed on every render and
//! never cached, so a logout in another tab shows up on the next navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/buses";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    Buses,
    Students,
    Notifications,
    /// `/`, which only ever redirects to [`HOME_PATH`].
    Root,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Open,
    Guarded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Render,
    Redirect(&'static str),
}

impl AppRoute {
    pub const ALL: [Self; 6] = [
        Self::Login,
        Self::Register,
        Self::Buses,
        Self::Students,
        Self::Notifications,
        Self::Root,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Register => "/register",
            Self::Buses => HOME_PATH,
            Self::Students => "/students",
            Self::Notifications => "/notifications",
            Self::Root => "/",
        }
    }

    /// Match a pathname, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    pub fn access(self) -> Access {
        match self {
            Self::Login | Self::Register => Access::Open,
            Self::Buses | Self::Students | Self::Notifications | Self::Root => Access::Guarded,
        }
    }
}

/// Decide what a route does for the current session state.
pub fn decide(route: AppRoute, authenticated: bool) -> Decision {
    if route == AppRoute::Root {
        return Decision::Redirect(HOME_PATH);
    }
    match route.access() {
        Access::Open => Decision::Render,
        Access::Guarded if authenticated => Decision::Render,
        Access::Guarded => Decision::Redirect(LOGIN_PATH),
    }
}
