//! Dashboard page: aggregate application counts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use jobtrack_core::ApiError;
use jobtrack_core::services::dashboard;
use jobtrack_core::types::{ApplicationStatus, DashboardStats};
use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::api;

/// One card per figure: total first, then each status in lifecycle order.
pub(crate) fn stat_cards(stats: &DashboardStats) -> Vec<(&'static str, u64)> {
    let mut cards = vec![("Total Applications", stats.total_applications)];
    cards.extend(ApplicationStatus::ALL.into_iter().map(|s| (s.label(), stats.count(s))));
    cards
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = RwSignal::new(None::<DashboardStats>);
    let error = RwSignal::new(String::new());

    leptos::task::spawn_local(async move {
        match dashboard::stats(&api::dispatcher()).await {
            Ok(loaded) => stats.set(Some(loaded)),
            Err(ApiError::SessionEnded) => {}
            Err(e) => {
                log::warn!("dashboard: {e}");
                error.set(e.user_message("Failed to load stats"));
            }
        }
    });

    view! {
        <NavBar/>
        <main class="page">
            <h1>"Dashboard"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>
            {move || match stats.get() {
                None => view! { <p>"Loading..."</p> }.into_any(),
                Some(stats) => view! {
                    <div class="stat-grid">
                        {stat_cards(&stats)
                            .into_iter()
                            .map(|(title, value)| view! {
                                <div class="stat-card">
                                    <span class="stat-card__title">{title}</span>
                                    <span class="stat-card__value">{value}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </main>
    }
}
