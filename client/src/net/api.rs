//! Dispatcher wiring for the browser.
//!
//! CONFIGURATION
//! =============
//! The API base URL and auth scheme are fixed at build time through
//! `JOBTRACK_API_BASE_URL` and `JOBTRACK_AUTH_SCHEME`; unset values fall back
//! to `http://localhost:8080` and bearer.
//!
//! Every call builds fresh [`SessionStore`]/[`Dispatcher`] handles. They are
//! cheap wrappers over `localStorage`, and rebuilding them keeps `Rc` state
//! out of reactive closures.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use jobtrack_core::{AuthScheme, Dispatcher, SessionStore};

use super::transport::GlooTransport;
use crate::storage::LocalStorage;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Backend root, without a trailing slash requirement.
pub const API_BASE_URL: &str = match option_env!("JOBTRACK_API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

fn parse_scheme(raw: Option<&str>) -> AuthScheme {
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("config: {e}; using bearer");
            AuthScheme::default()
        }),
        None => AuthScheme::default(),
    }
}

/// Scheme this build was configured with.
pub fn auth_scheme() -> AuthScheme {
    parse_scheme(option_env!("JOBTRACK_AUTH_SCHEME"))
}

/// Session backed by this page's `localStorage`.
pub fn session() -> SessionStore {
    SessionStore::new(auth_scheme(), LocalStorage)
}

/// Dispatcher that hard-redirects to login when the backend rejects a session.
pub fn dispatcher() -> Dispatcher {
    Dispatcher::new(session(), GlooTransport::new(API_BASE_URL), redirect_to_login)
}

/// Full page load of `login_path`; drops all in-memory page state.
fn redirect_to_login(login_path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(login_path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("redirect to {login_path} skipped outside the browser");
    }
}
