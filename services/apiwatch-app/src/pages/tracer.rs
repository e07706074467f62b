//! Tracer: the flat trace log, grouped by calendar day.

use aw_model::trace::{group_by_day, TraceGroup};
use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::log_card::LogCard;
use crate::components::shell::{Shell, HEADING_STYLE};
use crate::config::AppConfig;

#[component]
pub fn TracerPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (groups, set_groups) = signal(Vec::<TraceGroup>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::fetch_traces(&config).await {
            Ok(entries) => set_groups.set(group_by_day(entries, Local::now().date_naive())),
            Err(err) => {
                log::error!("failed to fetch trace logs: {err}");
                set_groups.set(Vec::new());
            }
        }
        set_loading.set(false);
    });

    view! {
        <Shell>
            <p style=HEADING_STYLE>"API Trace Logs"</p>
            {move || {
                if loading.get() {
                    return view! { <p>"Loading..."</p> }.into_any();
                }
                let groups = groups.get();
                if groups.is_empty() {
                    return view! { <p>"No trace logs."</p> }.into_any();
                }
                groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div>
                                <p style="font-weight: 600; color: #94a3b8; margin: 1rem 0 0.5rem 0;">
                                    {group.label}
                                </p>
                                {group
                                    .entries
                                    .into_iter()
                                    .map(|entry| view! { <LogCard entry=entry /> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </Shell>
    }
}
