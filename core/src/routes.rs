//! Application locations shared by both front-ends.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

/// Login entry point; target of every unauthenticated redirect.
pub const LOGIN_PATH: &str = "/login";

/// Landing page for an authenticated user.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// A location in the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Dashboard,
    Applications,
    NewApplication,
    EditApplication(i64),
}

impl Route {
    /// Parse a path (query string and trailing slash ignored).
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Root),
            ["login"] => Some(Self::Login),
            ["register"] => Some(Self::Register),
            ["dashboard"] => Some(Self::Dashboard),
            ["applications"] => Some(Self::Applications),
            ["applications", "new"] => Some(Self::NewApplication),
            ["applications", id, "edit"] => id.parse().ok().map(Self::EditApplication),
            _ => None,
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Root => "/".to_owned(),
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Dashboard => DASHBOARD_PATH.to_owned(),
            Self::Applications => "/applications".to_owned(),
            Self::NewApplication => "/applications/new".to_owned(),
            Self::EditApplication(id) => format!("/applications/{id}/edit"),
        }
    }

    /// Whether rendering this route requires a session.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Applications | Self::NewApplication | Self::EditApplication(_)
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
