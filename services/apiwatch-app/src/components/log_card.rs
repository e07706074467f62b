//! Detail card for one trace: header, timestamped lines, status footer.

use aw_model::clean::clean_message;
use aw_model::format::trace_timestamp;
use aw_model::types::LogEntry;
use leptos::prelude::*;

#[component]
pub fn LogCard(entry: LogEntry) -> impl IntoView {
    let status = entry
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    let response_time = entry
        .response_time_ms
        .map(|ms| format!("{ms} ms"))
        .unwrap_or_default();

    let body = if entry.logs.is_empty() {
        view! { <p style="margin: 0; color: #64748b;">"No logs available"</p> }.into_any()
    } else {
        entry
            .logs
            .iter()
            .map(|line| {
                let when = trace_timestamp(&line.timestamp)
                    .unwrap_or_else(|| line.timestamp.clone());
                view! {
                    <div style="margin-bottom: 0.5rem;">
                        <p style="margin: 0; font-size: 0.75rem; color: #64748b;">{when}</p>
                        <p style="margin: 0; font-size: 0.75rem; color: #38bdf8; text-transform: uppercase;">
                            {line.kind.clone()}
                        </p>
                        <p style="margin: 0; white-space: pre-wrap;">{clean_message(&line.message)}</p>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div style="background: #0f1524; border: 1px solid #1e293b; border-radius: 0.5rem; \
                    padding: 0.75rem 1rem; margin-bottom: 0.75rem; font-size: 0.875rem;">
            <div style="margin-bottom: 0.6rem;">
                <span style="color: #38bdf8; font-family: monospace;">{entry.trace_id.clone()}</span>
                " ➜ "
                <span style="font-weight: 600;">{entry.method.clone()}</span>
                " "
                {entry.endpoint.clone()}
            </div>
            <div>{body}</div>
            <div style="display: flex; justify-content: space-between; margin-top: 0.6rem; color: #94a3b8;">
                <span>"Status: " {status}</span>
                <span>{response_time}</span>
            </div>
        </div>
    }
}
