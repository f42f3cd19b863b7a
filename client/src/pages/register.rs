//! Registration page. A mismatched confirmation is reported inline and never
//! reaches the network.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use jobtrack_core::services::auth;
use jobtrack_core::types::RegisterRequest;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;

pub(crate) const REGISTRATION_FAILED: &str = "Registration failed";

pub(crate) fn register_form(email: &str, password: &str, confirm: &str) -> Result<RegisterRequest, &'static str> {
    let form = RegisterRequest {
        email: email.trim().to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    };
    auth::validate_registration(&form)?;
    Ok(form)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match register_form(&email.get(), &password.get(), &confirm.get()) {
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
            match auth::register(&api::dispatcher(), &form).await {
                Ok(_) => navigate(jobtrack_core::routes::LOGIN_PATH, NavigateOptions::default()),
                Err(e) => error.set(e.user_message(REGISTRATION_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
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
                    <label>
                        "Confirm Password"
                        <input
                            type="password"
                            required
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" disabled=move || busy.get()>"Register"</button>
                </form>
                <p>"Already have an account? " <A href="/login">"Login"</A></p>
            </div>
        </div>
    }
}
