//! Top navigation bar for authenticated pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;

#[component]
pub fn NavBar() -> impl IntoView {
    let email = api::session().current_profile().map(|p| p.email).unwrap_or_default();

    let on_logout = move |_| {
        jobtrack_core::services::auth::logout(&api::dispatcher());
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(jobtrack_core::routes::LOGIN_PATH);
            }
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Job Tracker"</span>
            <A href="/dashboard">"Dashboard"</A>
            <A href="/applications">"Applications"</A>
            <span class="nav-bar__user">{email}</span>
            <button class="nav-bar__logout" on:click=on_logout>"Logout"</button>
        </nav>
    }
}
