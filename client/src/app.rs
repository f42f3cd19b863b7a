//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected::{Protected, replace_history};
use crate::net::api;
use crate::pages::{
    application_form::ApplicationFormPage, applications::ApplicationsPage, dashboard::DashboardPage,
    login::LoginPage, register::RegisterPage,
};

/// Root application component.
///
/// Session state is not kept in context: every page reads it from
/// `localStorage` through a fresh [`api::session`] handle, so a logout in
/// another tab is seen on the next navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Job Tracker"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=Landing/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("applications")
                    view=|| view! { <Protected><ApplicationsPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("applications"), StaticSegment("new"))
                    view=|| view! { <Protected><ApplicationFormPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("applications"), ParamSegment("id"), StaticSegment("edit"))
                    view=|| view! { <Protected><ApplicationFormPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}

/// `/`: forward to the dashboard or to login.
#[component]
fn Landing() -> impl IntoView {
    let to = jobtrack_core::RouteGuard::new(api::session()).landing();
    view! { <Redirect path=to options=replace_history()/> }
}
