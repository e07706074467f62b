//! One pass/fail chip in an endpoint's monthly strip.

use leptos::prelude::*;

#[component]
pub fn StatusCard(status: Option<u16>) -> impl IntoView {
    let style = format!(
        "flex: 0 0 auto; width: 0.5rem; height: 1.75rem; border-radius: 2px; background-color: {};",
        status_color(status)
    );
    view! { <div style=style></div> }
}

/// Chip color by status class: 2xx green, 3xx orange, 4xx/5xx red,
/// 1xx yellow, anything else neutral.
pub(crate) fn status_color(status: Option<u16>) -> &'static str {
    match status {
        Some(s) if (200..300).contains(&s) => "#2ecc71",
        Some(s) if (300..400).contains(&s) => "#e67e22",
        Some(s) if (400..600).contains(&s) => "#e74c3c",
        Some(s) if (100..200).contains(&s) => "#f1c40f",
        _ => "#334155",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_map_to_colors() {
        assert_eq!(status_color(Some(204)), "#2ecc71");
        assert_eq!(status_color(Some(301)), "#e67e22");
        assert_eq!(status_color(Some(404)), "#e74c3c");
        assert_eq!(status_color(Some(503)), "#e74c3c");
        assert_eq!(status_color(Some(101)), "#f1c40f");
        assert_eq!(status_color(Some(700)), "#334155");
        assert_eq!(status_color(None), "#334155");
    }
}
