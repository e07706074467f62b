//! Wire types for the backend log service.
//!
//! Shapes are backend-defined JSON consumed as-is. Every field the backend
//! may omit is defaulted once here, at the response boundary, so the views
//! never guard individual accesses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One timestamped sub-event inside a trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogLine {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

/// One recorded invocation of a monitored endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogEntry {
    pub trace_id: String,
    pub method: String,
    pub endpoint: String,
    pub status: Option<u16>,
    pub response_time_ms: Option<f64>,
    pub timestamp: String,
    pub logs: Vec<LogLine>,
}

impl LogEntry {
    /// Identity within a list: `traceId` plus timestamp for disambiguation.
    pub fn key(&self) -> String {
        format!("{}-{}", self.trace_id, self.timestamp)
    }
}

/// Per-endpoint status history as returned by `/api/logs/time`: base
/// endpoint -> calls in server order.
pub type GroupedLogs = BTreeMap<String, Vec<LogEntry>>;

/// Per-endpoint feature switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggles {
    pub api: bool,
    pub tracer: bool,
    pub limit: bool,
    pub schedule: bool,
}

/// Rate-limit settings, present when the `limit` toggle is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitValues {
    pub number: Option<u32>,
    pub rate: Option<u32>,
}

/// Schedule window (`HH:MM` times), present when the `schedule` toggle is on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleValues {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Stored configuration for one monitored endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlConfig {
    pub endpoint: String,
    pub timestamp: String,
    pub toggles: Toggles,
    pub limit_values: Option<LimitValues>,
    pub schedule_values: Option<ScheduleValues>,
}

/// Most frequent error status for the month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxErrorStatus {
    #[serde(rename = "_id")]
    pub id: Option<u16>,
    pub count: u64,
}

/// Monthly aggregate statistics from `/api/logs/analysis`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub uptime_percent: Option<f64>,
    pub total_requests: Option<u64>,
    pub total_response_time: Option<f64>,
    pub avg_response_time: Option<f64>,
    pub error_percent: Option<f64>,
    pub max_error_status: Option<MaxErrorStatus>,
    pub last_error_timestamp: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub is_fallback: bool,
}

impl AnalyticsSummary {
    /// Whether the payload carries real figures. A summary without a
    /// request count or uptime figure is an empty month.
    pub fn has_data(&self) -> bool {
        self.total_requests.is_some() || self.uptime_percent.is_some()
    }
}

/// One day of the uptime time series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: String,
    pub uptime_percent: f64,
}

/// `GET /api/logs/control` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlListResponse {
    pub data: Vec<ControlConfig>,
}

/// `GET /api/logs` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceListResponse {
    pub data: Vec<LogEntry>,
}

/// `GET /api/logs/time` envelope. `year`/`month` report the period the
/// server actually answered for when it fell back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyStatusResponse {
    pub data: GroupedLogs,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// `GET /api/logs/chart` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartResponse {
    pub data: Vec<ChartPoint>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub is_fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entry_defaults_missing_fields() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"traceId":"t1","method":"GET","endpoint":"/users","timestamp":"2024-03-07T10:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(entry.trace_id, "t1");
        assert_eq!(entry.status, None);
        assert_eq!(entry.response_time_ms, None);
        assert!(entry.logs.is_empty());
    }

    #[test]
    fn log_line_maps_type_field() {
        let line: LogLine =
            serde_json::from_str(r#"{"timestamp":"x","type":"info","message":"m"}"#).unwrap();
        assert_eq!(line.kind, "info");
    }

    #[test]
    fn empty_body_yields_empty_envelopes() {
        let controls: ControlListResponse = serde_json::from_str("{}").unwrap();
        assert!(controls.data.is_empty());

        let monthly: MonthlyStatusResponse = serde_json::from_str("{}").unwrap();
        assert!(monthly.data.is_empty());
        assert_eq!(monthly.year, None);

        let chart: ChartResponse = serde_json::from_str("{}").unwrap();
        assert!(chart.data.is_empty());
        assert!(!chart.is_fallback);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let summary: AnalyticsSummary = serde_json::from_str(
            r#"{"uptimePercent":99.5,"somethingNew":true,"maxErrorStatus":{"_id":500,"count":3}}"#,
        )
        .unwrap();
        assert_eq!(summary.uptime_percent, Some(99.5));
        assert_eq!(summary.max_error_status.unwrap().id, Some(500));
        assert!(summary.has_data());
    }

    #[test]
    fn summary_without_figures_has_no_data() {
        let summary: AnalyticsSummary =
            serde_json::from_str(r#"{"year":2024,"month":3,"isFallback":true}"#).unwrap();
        assert!(!summary.has_data());
        assert!(summary.is_fallback);
    }

    #[test]
    fn control_config_round_trips_camel_case() {
        let cfg: ControlConfig = serde_json::from_str(
            r#"{"endpoint":"/users","toggles":{"api":true},"limitValues":{"number":100,"rate":5}}"#,
        )
        .unwrap();
        assert!(cfg.toggles.api);
        assert!(!cfg.toggles.limit);
        assert_eq!(cfg.limit_values.unwrap().number, Some(100));
        assert_eq!(cfg.schedule_values, None);
    }

    #[test]
    fn entry_key_combines_trace_id_and_timestamp() {
        let entry = LogEntry {
            trace_id: "abc".into(),
            timestamp: "2024-03-07T10:00:00.000Z".into(),
            ..LogEntry::default()
        };
        assert_eq!(entry.key(), "abc-2024-03-07T10:00:00.000Z");
    }
}
