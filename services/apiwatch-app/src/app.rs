//! Root application component and routes.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::toast::{ToastStack, Toasts};
use crate::config::AppConfig;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::config::ConfigPage;
use crate::pages::home::HomePage;
use crate::pages::tracer::TracerPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppConfig::load());
    provide_context(Toasts::new());

    view! {
        <Title text="ApiWatch" />
        <ToastStack />
        <Router>
            <Routes fallback=|| view! { <p style="padding: 2rem;">"Not found."</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/tracer") view=TracerPage />
                <Route path=path!("/analytics") view=AnalyticsPage />
                <Route path=path!("/config") view=ConfigPage />
            </Routes>
        </Router>
    }
}
