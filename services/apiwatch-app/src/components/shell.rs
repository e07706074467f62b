//! Page chrome: sidebar plus the main content column.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div style="display: flex; min-height: 100vh; background: #0b1020; color: #e2e8f0; font-family: system-ui, sans-serif;">
            <Sidebar />
            <main style="flex: 1; padding: 1.5rem 2rem; max-width: 72rem;">{children()}</main>
        </div>
    }
}

/// Shared page heading style.
pub const HEADING_STYLE: &str =
    "font-size: 1.5rem; font-weight: 700; margin: 0 0 1rem 0; color: #f8fafc;";
