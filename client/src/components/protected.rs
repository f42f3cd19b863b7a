//! Route guard wrapper for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated once when the route mounts. Without a session the children are
//! never constructed, so a protected page never issues a request while
//! anonymous; the history entry is replaced so Back does not return here.

use jobtrack_core::{GuardOutcome, RouteGuard};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::net::api;

/// Navigation options that replace the current history entry.
pub fn replace_history() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Render `children` only when a session exists; otherwise redirect to login.
#[component]
pub fn Protected(children: Children) -> impl IntoView {
    match RouteGuard::new(api::session()).protect() {
        GuardOutcome::Allowed => children().into_any(),
        GuardOutcome::Redirected { to } => view! { <Redirect path=to options=replace_history()/> }.into_any(),
    }
}
