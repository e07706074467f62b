//! Analytics: monthly aggregate stats and the daily uptime chart.

use aw_model::chart::{shape, ChartDatum};
use aw_model::format::{compact_number, round1, short_datetime};
use aw_model::period::{reconcile, Period, Reconciliation};
use aw_model::types::AnalyticsSummary;
use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::chart::UptimeChart;
use crate::components::month_picker::MonthPicker;
use crate::components::shell::{Shell, HEADING_STYLE};
use crate::components::stat_card::StatCard;
use crate::config::AppConfig;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (period, set_period) = signal(Period::from_date(Local::now().date_naive()));
    let (summary, set_summary) = signal(None::<AnalyticsSummary>);
    let (chart_data, set_chart_data) = signal(Vec::<ChartDatum>::new());
    let (loading, set_loading) = signal(true);
    let latest_request = StoredValue::new(0u64);

    // The summary and chart requests run concurrently under one request
    // id; the summary is primary for retargeting the selector.
    let load = move |requested: Period, initial_load: bool| {
        let request_id = latest_request.get_value() + 1;
        latest_request.set_value(request_id);
        set_loading.set(true);

        {
            let config = config.clone();
            spawn_local(async move {
                let result = api::fetch_analysis(&config, requested).await;
                if latest_request.get_value() != request_id {
                    return;
                }
                match result {
                    Ok(data) => {
                        let returned = Period::from_parts(data.year, data.month);
                        if data.is_fallback {
                            log::debug!(
                                "analysis fell back from {} to {:?}",
                                requested.label(),
                                returned.map(|p| p.label())
                            );
                        }
                        let accepted = data.has_data().then_some(data);
                        match reconcile(requested, returned, initial_load) {
                            Reconciliation::Accept => set_summary.set(accepted),
                            Reconciliation::Retarget(actual) => {
                                set_period.set(actual);
                                set_summary.set(accepted);
                            }
                            Reconciliation::Reject => set_summary.set(None),
                        }
                    }
                    Err(err) => {
                        log::error!("failed to fetch analytics summary: {err}");
                        set_summary.set(None);
                    }
                }
                set_loading.set(false);
            });
        }

        {
            let config = config.clone();
            spawn_local(async move {
                let result = api::fetch_chart(&config, requested).await;
                if latest_request.get_value() != request_id {
                    return;
                }
                match result {
                    Ok(response) => {
                        let returned = Period::from_parts(response.year, response.month);
                        match reconcile(requested, returned, initial_load) {
                            Reconciliation::Reject => set_chart_data.set(Vec::new()),
                            // selector retargeting is owned by the summary fetch
                            Reconciliation::Accept | Reconciliation::Retarget(_) => {
                                set_chart_data.set(shape(&response.data));
                            }
                        }
                    }
                    Err(err) => {
                        log::error!("failed to fetch uptime chart: {err}");
                        set_chart_data.set(Vec::new());
                    }
                }
            });
        }
    };

    load(period.get_untracked(), true);

    let on_change = {
        let load = load.clone();
        move |selected: Period| {
            set_period.set(selected);
            load(selected, false);
        }
    };

    view! {
        <Shell>
            <p style=HEADING_STYLE>"Analysis"</p>
            <MonthPicker period=period on_change=on_change />

            <div style="display: flex; flex-wrap: wrap; gap: 1rem;">
                {move || {
                    if loading.get() {
                        view! { <p>"Loading..."</p> }.into_any()
                    } else if let Some(info) = summary.get() {
                        stat_cards(info).into_any()
                    } else {
                        view! { <p>"No data available for selected month."</p> }.into_any()
                    }
                }}
            </div>

            <div style="margin-top: 2rem;">
                <h3 style="margin: 0; color: #f8fafc;">"Uptime Percentage Over Time"</h3>
                <UptimeChart data=chart_data />
            </div>
        </Shell>
    }
}

fn stat_cards(info: AnalyticsSummary) -> impl IntoView {
    let uptime = info.uptime_percent.unwrap_or(0.0);
    let last_downtime = info
        .last_error_timestamp
        .as_deref()
        .and_then(short_datetime)
        .map(|when| format!("Last downtime: {when}"))
        .unwrap_or_else(|| "Last downtime: -".to_string());

    let total_response = info
        .total_response_time
        .map(|total| format!("{} ms", compact_number(round1(total))))
        .unwrap_or_else(|| "-".to_string());
    let avg_response = info
        .avg_response_time
        .map(|avg| format!("Average Response Time: {} ms", round1(avg)))
        .unwrap_or_else(|| "-".to_string());

    let total_requests = info.total_requests.unwrap_or(0);
    let per_week = if total_requests > 0 {
        format!(
            "Request per week : {} requests",
            (total_requests as f64 / 4.0).round() as u64
        )
    } else {
        "-".to_string()
    };

    let error_percent = info.error_percent.unwrap_or(0.0);
    let most_common = info
        .max_error_status
        .and_then(|status| status.id.map(|id| (id, status.count)));
    let error_extra = match most_common {
        Some((id, count)) => format!("Most common error: {id} ({count} Times)"),
        None => "Most common error: - (- Times)".to_string(),
    };

    view! {
        <StatCard
            title="Uptime (Per Month)"
            value=uptime
            display_text=format!("{}%", round1(uptime))
            extra=last_downtime
            color="#00FFA3"
        />
        <StatCard
            title="Total Response Time"
            value={info.total_response_time.unwrap_or(0.0).min(100.0)}
            display_text=total_response
            extra=avg_response
            color="#0080FF"
        />
        <StatCard
            title="Request Volume (Per Month)"
            value={(total_requests as f64 / 10.0).min(100.0)}
            display_text=compact_number(total_requests as f64)
            extra=per_week
            color="#FFD700"
        />
        <StatCard
            title="Error Rate (Per Month)"
            value=error_percent
            display_text=format!("{}%", round1(error_percent))
            extra=error_extra
            color="#FF4C4C"
        />
    }
}
