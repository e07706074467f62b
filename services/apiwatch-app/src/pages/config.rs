//! Configuration: the endpoint list and the controls side panel.

use aw_model::format::short_date;
use aw_model::types::ControlConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::controls::ControlsPanel;
use crate::components::shell::{Shell, HEADING_STYLE};
use crate::config::AppConfig;

const CELL_STYLE: &str = "padding: 0.6rem 0.75rem; border-bottom: 1px solid #1e293b;";

#[component]
pub fn ConfigPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (endpoints, set_endpoints) = signal(Vec::<ControlConfig>::new());
    let (loading, set_loading) = signal(true);
    // Panel state is owned here and passed down; nothing global.
    let (selected, set_selected) = signal(None::<String>);
    let panel: NodeRef<leptos::html::Div> = NodeRef::new();

    spawn_local(async move {
        match api::fetch_controls(&config).await {
            Ok(list) => set_endpoints.set(list),
            Err(err) => log::error!("failed to fetch control configs: {err}"),
        }
        set_loading.set(false);
    });

    // A press anywhere outside the open panel closes it. The listener
    // lives for this page's mounted lifetime only.
    let listener = window_event_listener(leptos::ev::mousedown, move |ev| {
        if selected.get_untracked().is_none() {
            return;
        }
        let Some(panel_el) = panel.get_untracked() else {
            return;
        };
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = target
            .map(|node| panel_el.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            set_selected.set(None);
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <Shell>
            <p style=HEADING_STYLE>"API List"</p>
            {move || {
                if loading.get() {
                    return view! { <p>"Loading..."</p> }.into_any();
                }
                let list = endpoints.get();
                if list.is_empty() {
                    return view! { <p>"No endpoints configured."</p> }.into_any();
                }
                view! {
                    <table style="width: 100%; border-collapse: collapse; background: #0f1524; \
                                  border: 1px solid #1e293b; border-radius: 0.5rem;">
                        <thead>
                            <tr style="text-align: left; color: #94a3b8;">
                                <th style=CELL_STYLE>"API Name"</th>
                                <th style=CELL_STYLE>"Start Date"</th>
                                <th style=CELL_STYLE></th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|entry| {
                                    let started = short_date(&entry.timestamp)
                                        .unwrap_or_else(|| "-".to_string());
                                    let endpoint = entry.endpoint.clone();
                                    view! {
                                        <tr>
                                            <td style=CELL_STYLE>{entry.endpoint.clone()}</td>
                                            <td style=CELL_STYLE>{started}</td>
                                            <td style=CELL_STYLE>
                                                <button
                                                    style="background: transparent; border: none; \
                                                           color: #94a3b8; font-size: 1.1rem; \
                                                           cursor: pointer;"
                                                    on:click=move |_| {
                                                        set_selected.set(Some(endpoint.clone()))
                                                    }
                                                >
                                                    "⋮"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            {move || {
                selected
                    .get()
                    .map(|endpoint| {
                        view! {
                            <div
                                node_ref=panel
                                style="position: fixed; top: 4rem; right: 1.5rem; z-index: 100;"
                            >
                                <ControlsPanel
                                    endpoint=endpoint
                                    on_close=move |_: ()| set_selected.set(None)
                                />
                            </div>
                        }
                    })
            }}
        </Shell>
    }
}
