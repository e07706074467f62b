//! Transient success/error notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    text: String,
}

/// Toast store, provided as context from the app root.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    fn push(&self, kind: ToastKind, text: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Toast { id, kind, text }));

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            items.update(|list| list.retain(|toast| toast.id != id));
        });
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    view! {
        <div style="position: fixed; top: 1rem; right: 1rem; display: flex; flex-direction: column; \
                    gap: 0.5rem; z-index: 1000;">
            {move || {
                toasts
                    .items
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let (color, bg) = match toast.kind {
                            ToastKind::Success => ("#155724", "#d4edda"),
                            ToastKind::Error => ("#721c24", "#f8d7da"),
                        };
                        let style = format!(
                            "padding: 0.6rem 1rem; border-radius: 0.375rem; font-size: 0.875rem; \
                             font-weight: 600; color: {color}; background-color: {bg}; \
                             box-shadow: 0 2px 8px rgba(0, 0, 0, 0.35);"
                        );
                        view! { <div style=style>{toast.text}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
