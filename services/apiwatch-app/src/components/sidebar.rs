//! Static navigation sidebar. No state.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav style="width: 13rem; padding: 1.25rem 1rem; background: #0f1524; border-right: 1px solid #1e293b;">
            <span style="font-size: 1.1rem; font-weight: 700; color: #f8fafc;">
                "API " <span style="color: #0075ff;">"Management"</span>
            </span>
            <hr style="border-color: #1e293b; margin: 1rem 0;" />
            <ul style="margin: 0; padding: 0;">
                <NavItem href="/" title="Home" />
                <NavItem href="/tracer" title="Tracer" />
                <NavItem href="/analytics" title="Analysis" />
                <NavItem href="/config" title="Configuration" />
            </ul>
            <hr style="border-color: #1e293b; margin: 1rem 0;" />
        </nav>
    }
}

#[component]
fn NavItem(href: &'static str, title: &'static str) -> impl IntoView {
    let location = use_location();
    let style = move || {
        let active = location.pathname.get() == href;
        format!(
            "display: block; padding: 0.5rem 0.75rem; margin-bottom: 0.25rem; \
             border-radius: 0.375rem; color: {}; background: {};",
            if active { "#f8fafc" } else { "#94a3b8" },
            if active { "#0075ff" } else { "transparent" },
        )
    };
    view! {
        <li style="list-style: none;">
            <A href=href>
                <span style=style>{title}</span>
            </A>
        </li>
    }
}
