//! Route guard for protected regions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front-ends evaluate the guard on every navigation into a protected route
//! and before every protected CLI command. The guard reads the session once
//! per evaluation and does not subscribe to later changes; a logout that
//! happens elsewhere is caught by the dispatcher's next 401.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{DASHBOARD_PATH, LOGIN_PATH, Route};
use crate::session::SessionStore;

/// Result of evaluating a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested content.
    Allowed,
    /// Render nothing; replace the current location with `to`.
    Redirected { to: &'static str },
}

/// Checks routes against the current session.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    session: SessionStore,
}

impl RouteGuard {
    #[must_use]
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// Decide whether `route` may render.
    ///
    /// Unprotected routes are always allowed except [`Route::Root`], which
    /// redirects to the dashboard or login depending on the session.
    #[must_use]
    pub fn evaluate(&self, route: Route) -> GuardOutcome {
        if route == Route::Root {
            return GuardOutcome::Redirected { to: self.landing() };
        }
        if !route.is_protected() {
            return GuardOutcome::Allowed;
        }
        self.protect()
    }

    /// Evaluate a protected region without naming the route.
    #[must_use]
    pub fn protect(&self) -> GuardOutcome {
        if self.session.is_authenticated() {
            GuardOutcome::Allowed
        } else {
            log::debug!("guard: no session, redirecting to {LOGIN_PATH}");
            GuardOutcome::Redirected { to: LOGIN_PATH }
        }
    }

    /// Where `/` should send the user.
    #[must_use]
    pub fn landing(&self) -> &'static str {
        if self.session.is_authenticated() {
            DASHBOARD_PATH
        } else {
            LOGIN_PATH
        }
    }
}
