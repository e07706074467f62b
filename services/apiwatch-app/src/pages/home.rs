//! Home: per-endpoint status history for a selected month.

use aw_model::period::{reconcile, Period, Reconciliation};
use aw_model::types::{GroupedLogs, LogEntry};
use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::month_picker::MonthPicker;
use crate::components::shell::{Shell, HEADING_STYLE};
use crate::components::status_card::StatusCard;
use crate::config::AppConfig;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (period, set_period) = signal(Period::from_date(Local::now().date_naive()));
    let (logs, set_logs) = signal(GroupedLogs::new());
    let (loading, set_loading) = signal(true);
    let latest_request = StoredValue::new(0u64);

    let load = move |requested: Period, initial_load: bool| {
        let request_id = latest_request.get_value() + 1;
        latest_request.set_value(request_id);
        set_loading.set(true);

        let config = config.clone();
        spawn_local(async move {
            let result = api::fetch_monthly_status(&config, requested).await;
            if latest_request.get_value() != request_id {
                // superseded by a newer selection
                return;
            }
            match result {
                Ok(response) => {
                    let returned = Period::from_parts(response.year, response.month);
                    match reconcile(requested, returned, initial_load) {
                        Reconciliation::Accept => set_logs.set(response.data),
                        Reconciliation::Retarget(actual) => {
                            set_period.set(actual);
                            set_logs.set(response.data);
                        }
                        Reconciliation::Reject => set_logs.set(GroupedLogs::new()),
                    }
                }
                Err(err) => {
                    log::error!("failed to fetch monthly status: {err}");
                    set_logs.set(GroupedLogs::new());
                }
            }
            set_loading.set(false);
        });
    };

    load(period.get_untracked(), true);

    let on_change = {
        let load = load.clone();
        move |selected: Period| {
            set_period.set(selected);
            load(selected, false);
        }
    };

    let empty = move || logs.with(|l| l.is_empty() || l.values().all(|calls| calls.is_empty()));

    view! {
        <Shell>
            <p style=HEADING_STYLE>"Home"</p>
            <MonthPicker period=period on_change=on_change />
            {move || {
                if loading.get() {
                    view! { <p>"Loading..."</p> }.into_any()
                } else if empty() {
                    view! { <p>"No data for this month."</p> }.into_any()
                } else {
                    logs.get()
                        .into_iter()
                        .map(|(endpoint, calls)| view! { <StatusRow endpoint=endpoint calls=calls /> })
                        .collect::<Vec<_>>()
                        .into_any()
                }
            }}
        </Shell>
    }
}

/// One endpoint's month of calls: a horizontally scrolling chip strip,
/// kept scrolled to the newest entry, with a trailing icon for the most
/// recent call.
#[component]
fn StatusRow(endpoint: String, calls: Vec<LogEntry>) -> impl IntoView {
    let strip: NodeRef<leptos::html::Div> = NodeRef::new();
    Effect::new(move |_| {
        if let Some(el) = strip.get() {
            el.set_scroll_left(el.scroll_width());
        }
    });

    let icon = status_icon(calls.last().and_then(|call| call.status));

    view! {
        <div style="margin-bottom: 1.25rem;">
            <p style="font-weight: 600; margin: 0 0 0.4rem 0;">{endpoint}</p>
            <div style="display: flex; align-items: center; gap: 0.75rem;">
                <div
                    node_ref=strip
                    style="display: flex; gap: 3px; overflow-x: auto; max-width: 48rem; \
                           padding-bottom: 0.25rem;"
                >
                    {calls
                        .iter()
                        .map(|call| view! { <StatusCard status=call.status /> })
                        .collect::<Vec<_>>()}
                </div>
                <span>{icon}</span>
            </div>
        </div>
    }
}

/// ✔ for a final 2xx, ❌ for any other known status.
pub(crate) fn status_icon(status: Option<u16>) -> &'static str {
    match status {
        Some(s) if (200..300).contains(&s) => "✔️",
        Some(_) => "❌",
        None => "",
    }
}
