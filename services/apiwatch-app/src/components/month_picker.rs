//! `‹ Mar 2024 ›` month stepper for the period-scoped views.

use aw_model::period::Period;
use leptos::prelude::*;

const STEP_STYLE: &str = "background: transparent; border: 1px solid #1e293b; color: #94a3b8; \
     border-radius: 0.25rem; width: 1.6rem; height: 1.6rem; cursor: pointer;";

/// Month selector. Stepping fires `on_change` with the new period; the
/// page owns the signal and the fetch it triggers.
#[component]
pub fn MonthPicker(
    period: ReadSignal<Period>,
    #[prop(into)] on_change: Callback<Period>,
) -> impl IntoView {
    view! {
        <div style="display: inline-flex; align-items: center; gap: 0.6rem; background: #0f1524; \
                    border: 1px solid #1e293b; border-radius: 0.5rem; padding: 0.5rem 0.9rem; \
                    margin-bottom: 1.25rem;">
            <span style="color: #94a3b8;">"System Status :"</span>
            <button
                style=STEP_STYLE
                on:click=move |_| on_change.run(period.get_untracked().prev())
            >
                "‹"
            </button>
            <span style="min-width: 5.5rem; text-align: center; font-weight: 600;">
                {move || period.get().label()}
            </span>
            <button
                style=STEP_STYLE
                on:click=move |_| on_change.run(period.get_untracked().next())
            >
                "›"
            </button>
        </div>
    }
}
