//! Runtime configuration for the dashboard.
//!
//! The hosting page injects deployment settings via meta tags:
//!
//! ```html
//! <meta name="apiwatch:api-url" content="https://logs.example.com">
//! <meta name="apiwatch:api-key" content="...">
//! ```
//!
//! The compile-time `APIWATCH_API_URL` env var and the window origin are
//! the fallbacks for the base URL. The write-path API key has no
//! fallback: it is never compiled into the distributed bundle.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub api_key: Option<String>,
}

impl AppConfig {
    /// Read the configuration once at startup.
    pub fn load() -> Self {
        let api_url = meta_content("apiwatch:api-url")
            .or_else(|| option_env!("APIWATCH_API_URL").map(str::to_string))
            .or_else(window_origin)
            .unwrap_or_default();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: meta_content("apiwatch:api-key"),
        }
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name='{name}']"))
        .ok()??;
    element.get_attribute("content").filter(|v| !v.is_empty())
}

fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
