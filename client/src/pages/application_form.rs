//! Create or edit a single application.
//!
//! `/applications/new` starts blank; `/applications/:id/edit` loads the
//! existing record first and submits a full replace.

#[cfg(test)]
#[path = "application_form_test.rs"]
mod application_form_test;

use jobtrack_core::ApiError;
use jobtrack_core::services::applications;
use jobtrack_core::types::{ApplicationForm, ApplicationStatus};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::nav_bar::NavBar;
use crate::net::api;

pub(crate) const OPERATION_FAILED: &str = "Operation failed";

pub(crate) fn parse_id(raw: Option<String>) -> Option<i64> {
    raw.and_then(|id| id.parse().ok())
}

/// Build the request body from raw field values.
pub(crate) fn build_form(
    company: &str,
    role: &str,
    status: &str,
    applied_date: &str,
) -> Result<ApplicationForm, &'static str> {
    let company_name = company.trim();
    let job_role = role.trim();
    let applied_date = applied_date.trim();
    if company_name.is_empty() || job_role.is_empty() || applied_date.is_empty() {
        return Err("Company, role, and applied date are required.");
    }
    let status = status.parse::<ApplicationStatus>().map_err(|_| "Choose a status.")?;
    Ok(ApplicationForm {
        company_name: company_name.to_owned(),
        job_role: job_role.to_owned(),
        status,
        applied_date: applied_date.to_owned(),
    })
}

#[component]
pub fn ApplicationFormPage() -> impl IntoView {
    let params = use_params_map();
    let edit_id = parse_id(params.with_untracked(|p| p.get("id")));
    let navigate = use_navigate();

    let company = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let status = RwSignal::new(ApplicationStatus::Applied.as_str().to_owned());
    let applied_date = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    if let Some(id) = edit_id {
        leptos::task::spawn_local(async move {
            match applications::get(&api::dispatcher(), id).await {
                Ok(app) => {
                    company.set(app.company_name);
                    role.set(app.job_role);
                    status.set(app.status.as_str().to_owned());
                    applied_date.set(app.applied_date);
                }
                Err(ApiError::SessionEnded) => {}
                Err(e) => error.set(e.user_message("Failed to load application")),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match build_form(&company.get(), &role.get(), &status.get(), &applied_date.get()) {
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
            let dispatcher = api::dispatcher();
            let result = match edit_id {
                Some(id) => applications::update(&dispatcher, id, &form).await,
                None => applications::create(&dispatcher, &form).await,
            };
            match result {
                Ok(_) => navigate("/applications", NavigateOptions::default()),
                Err(ApiError::SessionEnded) => {}
                Err(e) => error.set(e.user_message(OPERATION_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <NavBar/>
        <main class="page page--narrow">
            <h1>{if edit_id.is_some() { "Edit Application" } else { "Add Application" }}</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>
            <form class="app-form" on:submit=on_submit>
                <label>
                    "Company Name"
                    <input
                        required
                        prop:value=move || company.get()
                        on:input=move |ev| company.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Job Role"
                    <input
                        required
                        prop:value=move || role.get()
                        on:input=move |ev| role.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Status"
                    <select
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        {ApplicationStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Applied Date"
                    <input
                        type="date"
                        required
                        prop:value=move || applied_date.get()
                        on:input=move |ev| applied_date.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    {if edit_id.is_some() { "Update" } else { "Create" }}
                </button>
            </form>
        </main>
    }
}
