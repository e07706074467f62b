//! HTTP client for the backend log service.
//!
//! One function per endpoint; callers catch errors, degrade to the empty
//! display state and log the diagnostic. There is no retry policy.

use aw_model::controls::ControlUpdate;
use aw_model::period::Period;
use aw_model::types::{
    AnalyticsSummary, ChartResponse, ControlConfig, ControlListResponse, LogEntry,
    MonthlyStatusResponse, TraceListResponse,
};
use gloo_net::http::Request;

use crate::config::AppConfig;

/// Errors surfaced by the backend client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("no API key configured for configuration writes")]
    MissingApiKey,
}

/// Result type alias for backend calls
pub type Result<T> = std::result::Result<T, ApiError>;

/// GET `/api/logs/control`
pub async fn fetch_controls(config: &AppConfig) -> Result<Vec<ControlConfig>> {
    let url = format!("{}/api/logs/control", config.api_url);
    let response: ControlListResponse = get_json(&url).await?;
    Ok(response.data)
}

/// GET `/api/logs`
pub async fn fetch_traces(config: &AppConfig) -> Result<Vec<LogEntry>> {
    let url = format!("{}/api/logs", config.api_url);
    let response: TraceListResponse = get_json(&url).await?;
    Ok(response.data)
}

/// GET `/api/logs/time?year=&month=`
pub async fn fetch_monthly_status(
    config: &AppConfig,
    period: Period,
) -> Result<MonthlyStatusResponse> {
    let url = format!("{}/api/logs/time?{}", config.api_url, period.query());
    get_json(&url).await
}

/// GET `/api/logs/analysis?year=&month=`
pub async fn fetch_analysis(config: &AppConfig, period: Period) -> Result<AnalyticsSummary> {
    let url = format!("{}/api/logs/analysis?{}", config.api_url, period.query());
    get_json(&url).await
}

/// GET `/api/logs/chart?year=&month=`
pub async fn fetch_chart(config: &AppConfig, period: Period) -> Result<ChartResponse> {
    let url = format!("{}/api/logs/chart?{}", config.api_url, period.query());
    get_json(&url).await
}

/// PUT `/api/logs/control`. Only the HTTP status is inspected; the key
/// comes from runtime configuration and is required.
pub async fn save_control(config: &AppConfig, update: &ControlUpdate) -> Result<()> {
    let api_key = config.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;
    let url = format!("{}/api/logs/control", config.api_url);
    let response = Request::put(&url)
        .header("x-api-key", api_key)
        .json(update)
        .map_err(|err| ApiError::Request(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| ApiError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
