//! Circular-progress stat tile for the Analytics view.

use leptos::prelude::*;

const RADIUS: f64 = 45.0;

/// One analytics figure: a gauge showing `value` (0-100) with
/// `display_text` in the middle and an `extra` line underneath.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    value: f64,
    #[prop(into)] display_text: String,
    #[prop(into)] extra: String,
    color: &'static str,
) -> impl IntoView {
    let circumference = std::f64::consts::TAU * RADIUS;
    let dash = circumference * value.clamp(0.0, 100.0) / 100.0;
    let dasharray = format!("{dash:.2} {circumference:.2}");

    view! {
        <div style="background: #101624; border: 1px solid #1e293b; border-radius: 0.75rem; \
                    padding: 1rem; width: 13rem; color: #f8fafc;">
            <p style="margin: 0 0 0.75rem 0; font-size: 0.9rem; color: #94a3b8;">{title}</p>
            <svg viewBox="0 0 120 120" width="120" height="120" style="display: block; margin: 0 auto;">
                <circle cx="60" cy="60" r="45" fill="none" stroke="#222" stroke-width="9" />
                <circle
                    cx="60"
                    cy="60"
                    r="45"
                    fill="none"
                    stroke=color
                    stroke-width="9"
                    stroke-linecap="round"
                    stroke-dasharray=dasharray
                    transform="rotate(-90 60 60)"
                />
                <text x="60" y="66" text-anchor="middle" fill="#fff" font-size="15">
                    {display_text}
                </text>
            </svg>
            <p style="margin: 0.75rem 0 0 0; font-size: 0.78rem; color: #94a3b8;">{extra}</p>
        </div>
    }
}
