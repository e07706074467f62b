//! Controls side panel: per-endpoint toggles and their values.

use aw_model::controls::{ControlsForm, Toggle};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::toast::Toasts;
use crate::config::AppConfig;

const ROW_STYLE: &str =
    "display: flex; justify-content: space-between; align-items: center; margin: 0.6rem 0;";
const INPUT_STYLE: &str = "background: #0b1020; border: 1px solid #1e293b; border-radius: 0.25rem; \
     color: #e2e8f0; padding: 0.3rem 0.5rem; width: 100%; margin: 0.15rem 0 0.5rem 0;";
const LABEL_STYLE: &str = "font-size: 0.78rem; color: #94a3b8;";

/// Edit panel for one endpoint's toggles. Prefills from the stored
/// configuration, validates on save and PUTs the result; the panel stays
/// open with edits intact when the write fails.
#[component]
pub fn ControlsPanel(endpoint: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = expect_context::<Toasts>();
    let form = RwSignal::new(ControlsForm::for_endpoint(&endpoint, None));
    let saving = RwSignal::new(false);

    {
        let endpoint = endpoint.clone();
        let config = config.clone();
        spawn_local(async move {
            match api::fetch_controls(&config).await {
                Ok(configs) => {
                    let existing = configs.iter().find(|c| c.endpoint == endpoint);
                    form.set(ControlsForm::for_endpoint(&endpoint, existing));
                }
                Err(err) => log::error!("failed to load control config: {err}"),
            }
        });
    }

    let on_save = move |_| {
        let update = match form.get_untracked().validate() {
            Ok(update) => update,
            Err(err) => {
                toasts.error(err.to_string());
                return;
            }
        };
        let config = config.clone();
        saving.set(true);
        spawn_local(async move {
            match api::save_control(&config, &update).await {
                Ok(()) => {
                    toasts.success("Configuration saved successfully!");
                    on_close.run(());
                }
                Err(ApiError::MissingApiKey) => {
                    toasts.error("No API key configured; settings are read-only.");
                }
                Err(err) => {
                    log::error!("failed to save control config: {err}");
                    toasts.error("Error saving settings.");
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div style="width: 17rem; background: #101624; border: 1px solid #1e293b; \
                    border-radius: 0.75rem; padding: 1rem 1.25rem; color: #e2e8f0; \
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.45);">
            <h3 style="margin: 0 0 0.5rem 0;">"Controls"</h3>

            <ToggleRow label="API" toggle=Toggle::Api form=form />
            <ToggleRow label="Tracer" toggle=Toggle::Tracer form=form />
            <ToggleRow label="Set Limit" toggle=Toggle::Limit form=form />

            {move || {
                form.get().toggles.limit.then(|| {
                    view! {
                        <div>
                            <label style=LABEL_STYLE>"Number of Requests"</label>
                            <input
                                type="number"
                                style=INPUT_STYLE
                                prop:value=move || form.get().number
                                on:input=move |ev| {
                                    form.update(|f| f.number = event_target_value(&ev))
                                }
                            />
                            <label style=LABEL_STYLE>"Rate"</label>
                            <input
                                type="number"
                                placeholder="min"
                                style=INPUT_STYLE
                                prop:value=move || form.get().rate
                                on:input=move |ev| form.update(|f| f.rate = event_target_value(&ev))
                            />
                        </div>
                    }
                })
            }}

            <ToggleRow label="Schedule On/Off" toggle=Toggle::Schedule form=form />

            {move || {
                form.get().toggles.schedule.then(|| {
                    view! {
                        <div>
                            <label style=LABEL_STYLE>"Start"</label>
                            <input
                                type="time"
                                style=INPUT_STYLE
                                prop:value=move || form.get().start
                                on:input=move |ev| form.update(|f| f.start = event_target_value(&ev))
                            />
                            <label style=LABEL_STYLE>"End"</label>
                            <input
                                type="time"
                                style=INPUT_STYLE
                                prop:value=move || form.get().end
                                on:input=move |ev| form.update(|f| f.end = event_target_value(&ev))
                            />
                        </div>
                    }
                })
            }}

            <div style="display: flex; justify-content: flex-end; margin-top: 1rem;">
                <button
                    style="background: #0075ff; color: #fff; border: none; border-radius: 0.375rem; \
                           padding: 0.5rem 1.25rem; font-weight: 600; cursor: pointer;"
                    prop:disabled=move || saving.get()
                    on:click=on_save
                >
                    "Save"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ToggleRow(label: &'static str, toggle: Toggle, form: RwSignal<ControlsForm>) -> impl IntoView {
    view! {
        <div style=ROW_STYLE>
            <span>{label}</span>
            <input
                type="checkbox"
                style="width: 1.1rem; height: 1.1rem; accent-color: #0075ff;"
                prop:checked=move || form.get().toggle(toggle)
                on:change=move |ev| {
                    form.update(|f| f.set_toggle(toggle, event_target_checked(&ev)))
                }
            />
        </div>
    }
}
