//! Paged list of the user's applications with edit and delete actions.
//!
//! Deletes ask for confirmation first and then refetch the current page.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use jobtrack_core::ApiError;
use jobtrack_core::services::applications;
use jobtrack_core::types::{JobApplication, Page, PageRequest};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::nav_bar::NavBar;
use crate::net::api;

pub(crate) const PAGE_SIZES: [u32; 3] = [5, 10, 25];

/// `"Page 2 of 3"`; an empty result reads as page 1 of 1.
pub(crate) fn page_summary<T>(page: &Page<T>) -> String {
    format!("Page {} of {}", page.number.saturating_add(1), page.total_pages.max(1))
}

/// Rows-per-page from the `<select>`, falling back to the default size.
pub(crate) fn parse_page_size(raw: &str) -> u32 {
    raw.parse()
        .ok()
        .filter(|size| PAGE_SIZES.contains(size))
        .unwrap_or(PageRequest::DEFAULT_SIZE)
}

pub(crate) fn edit_path(id: i64) -> String {
    format!("/applications/{id}/edit")
}

fn confirm_delete() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

fn fetch(request: PageRequest, page: RwSignal<Option<Page<JobApplication>>>, error: RwSignal<String>) {
    leptos::task::spawn_local(async move {
        match applications::list(&api::dispatcher(), request).await {
            Ok(loaded) => {
                error.set(String::new());
                page.set(Some(loaded));
            }
            Err(ApiError::SessionEnded) => {}
            Err(e) => {
                log::warn!("applications: {e}");
                error.set(e.user_message("Failed to load applications"));
            }
        }
    });
}

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let request = RwSignal::new(PageRequest::default());
    let page = RwSignal::new(None::<Page<JobApplication>>);
    let error = RwSignal::new(String::new());

    Effect::new(move || fetch(request.get(), page, error));

    let on_delete = move |id: i64| {
        if !confirm_delete() {
            return;
        }
        leptos::task::spawn_local(async move {
            match applications::delete(&api::dispatcher(), id).await {
                Ok(()) => fetch(request.get_untracked(), page, error),
                Err(ApiError::SessionEnded) => {}
                Err(e) => error.set(e.user_message("Failed to delete application")),
            }
        });
    };

    let rows = move || page.get().map(|p| p.content).unwrap_or_default();
    let has_previous = move || page.get().is_some_and(|p| p.has_previous());
    let has_next = move || page.get().is_some_and(|p| p.has_next());

    view! {
        <NavBar/>
        <main class="page">
            <div class="page-header">
                <h1>"My Applications"</h1>
                <A href="/applications/new">"Add Application"</A>
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>
            <table class="app-table">
                <thead>
                    <tr>
                        <th>"Company"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th>"Applied Date"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|app: &JobApplication| app.id
                        children=move |app: JobApplication| {
                            let id = app.id;
                            view! {
                                <tr>
                                    <td>{app.company_name}</td>
                                    <td>{app.job_role}</td>
                                    <td>{app.status.label()}</td>
                                    <td>{app.applied_date}</td>
                                    <td>
                                        <A href=edit_path(id)>"Edit"</A>
                                        <button class="danger" on:click=move |_| on_delete(id)>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <div class="pager">
                <label>
                    "Rows per page "
                    <select on:change=move |ev| {
                        let size = parse_page_size(&event_target_value(&ev));
                        request.set(PageRequest::new(0, size));
                    }>
                        {PAGE_SIZES
                            .into_iter()
                            .map(|size| view! {
                                <option value=size.to_string() selected=move || request.get().size == size>
                                    {size}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <button
                    disabled=move || !has_previous()
                    on:click=move |_| request.update(|r| *r = r.previous())
                >
                    "Previous"
                </button>
                <span>{move || page.get().map(|p| page_summary(&p)).unwrap_or_default()}</span>
                <button
                    disabled=move || !has_next()
                    on:click=move |_| request.update(|r| *r = r.next())
                >
                    "Next"
                </button>
            </div>
        </main>
    }
}
