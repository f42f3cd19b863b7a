//! Login page: email + password against `POST /auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use jobtrack_core::services::auth;
use jobtrack_core::types::LoginRequest;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;

pub(crate) const LOGIN_FAILED: &str = "Login failed";

/// Trim the email and check both fields are present.
pub(crate) fn login_form(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let form = LoginRequest {
        email: email.trim().to_owned(),
        password: password.to_owned(),
    };
    auth::validate_login(&form)?;
    Ok(form)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match login_form(&email.get(), &password.get()) {
            Ok(form) => form,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::login(&api::dispatcher(), &form).await {
                Ok(_) => navigate(jobtrack_core::routes::DASHBOARD_PATH, NavigateOptions::default()),
                Err(e) => {
                    log::warn!("login failed: {e}");
                    error.set(e.user_message(LOGIN_FAILED));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p>"Don't have an account? " <A href="/register">"Register"</A></p>
            </div>
        </div>
    }
}
