//! Controls-panel edit state and the save validation policy.

use chrono::NaiveTime;
use serde::Serialize;

use crate::types::{ControlConfig, LimitValues, ScheduleValues, Toggles};

/// The four per-endpoint feature switches the panel edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Api,
    Tracer,
    Limit,
    Schedule,
}

/// Save rejections. `Display` strings are the user-visible notifications.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both number and rate.")]
    MissingLimitValues,
    #[error("Limit values must be whole numbers.")]
    InvalidLimitValues,
    #[error("Please enter both start and end times.")]
    MissingScheduleValues,
    #[error("Times must be valid HH:MM values.")]
    InvalidScheduleValues,
    #[error("Start time must be earlier than end time.")]
    ScheduleOutOfOrder,
}

/// PUT payload for `/api/logs/control`. Disabled sections serialize as
/// explicit nulls, never empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlUpdate {
    pub endpoint: String,
    pub toggles: Toggles,
    pub limit_values: LimitValues,
    pub schedule_values: ScheduleValues,
}

/// In-progress panel edits. Field values are kept as typed, exactly as
/// entered, until `validate` converts them for the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlsForm {
    pub endpoint: String,
    pub toggles: Toggles,
    pub number: String,
    pub rate: String,
    pub start: String,
    pub end: String,
}

impl ControlsForm {
    /// Panel state for an endpoint, prefilled from its stored
    /// configuration when one exists.
    pub fn for_endpoint(endpoint: &str, existing: Option<&ControlConfig>) -> Self {
        let Some(config) = existing else {
            return Self {
                endpoint: endpoint.to_string(),
                ..Self::default()
            };
        };
        let limit = config.limit_values.unwrap_or_default();
        let schedule = config.schedule_values.clone().unwrap_or_default();
        Self {
            endpoint: endpoint.to_string(),
            toggles: config.toggles,
            number: limit.number.map(|n| n.to_string()).unwrap_or_default(),
            rate: limit.rate.map(|r| r.to_string()).unwrap_or_default(),
            start: schedule.start.unwrap_or_default(),
            end: schedule.end.unwrap_or_default(),
        }
    }

    pub fn toggle(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Api => self.toggles.api,
            Toggle::Tracer => self.toggles.tracer,
            Toggle::Limit => self.toggles.limit,
            Toggle::Schedule => self.toggles.schedule,
        }
    }

    /// Flip a switch. Turning `limit` or `schedule` off clears the
    /// associated values immediately so nothing stale survives.
    pub fn set_toggle(&mut self, toggle: Toggle, on: bool) {
        match toggle {
            Toggle::Api => self.toggles.api = on,
            Toggle::Tracer => self.toggles.tracer = on,
            Toggle::Limit => {
                self.toggles.limit = on;
                if !on {
                    self.number.clear();
                    self.rate.clear();
                }
            }
            Toggle::Schedule => {
                self.toggles.schedule = on;
                if !on {
                    self.start.clear();
                    self.end.clear();
                }
            }
        }
    }

    /// Check the edits and build the write payload. On rejection no
    /// request may be sent; the error text is shown to the user.
    pub fn validate(&self) -> Result<ControlUpdate, ValidationError> {
        let mut limit_values = LimitValues::default();
        if self.toggles.limit {
            let number = self.number.trim();
            let rate = self.rate.trim();
            if number.is_empty() || rate.is_empty() {
                return Err(ValidationError::MissingLimitValues);
            }
            limit_values = LimitValues {
                number: Some(
                    number
                        .parse()
                        .map_err(|_| ValidationError::InvalidLimitValues)?,
                ),
                rate: Some(
                    rate.parse()
                        .map_err(|_| ValidationError::InvalidLimitValues)?,
                ),
            };
        }

        let mut schedule_values = ScheduleValues::default();
        if self.toggles.schedule {
            let start = self.start.trim();
            let end = self.end.trim();
            if start.is_empty() || end.is_empty() {
                return Err(ValidationError::MissingScheduleValues);
            }
            let start_time =
                parse_time(start).ok_or(ValidationError::InvalidScheduleValues)?;
            let end_time = parse_time(end).ok_or(ValidationError::InvalidScheduleValues)?;
            if start_time >= end_time {
                return Err(ValidationError::ScheduleOutOfOrder);
            }
            schedule_values = ScheduleValues {
                start: Some(start.to_string()),
                end: Some(end.to_string()),
            };
        }

        Ok(ControlUpdate {
            endpoint: self.endpoint.clone(),
            toggles: self.toggles,
            limit_values,
            schedule_values,
        })
    }
}

/// Same-day time, `HH:MM` with an optional seconds part.
fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .ok()
        .or_else(|| NaiveTime::parse_from_str(value, "%H:%M:%S").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> ControlsForm {
        ControlsForm {
            endpoint: "/users".to_string(),
            ..ControlsForm::default()
        }
    }

    #[test]
    fn limit_requires_both_values() {
        let mut f = form();
        f.set_toggle(Toggle::Limit, true);
        f.number = String::new();
        f.rate = "5".to_string();
        assert_eq!(f.validate(), Err(ValidationError::MissingLimitValues));

        f.number = "100".to_string();
        f.rate = String::new();
        assert_eq!(f.validate(), Err(ValidationError::MissingLimitValues));
    }

    #[test]
    fn limit_rejects_non_numeric_values() {
        let mut f = form();
        f.set_toggle(Toggle::Limit, true);
        f.number = "lots".to_string();
        f.rate = "5".to_string();
        assert_eq!(f.validate(), Err(ValidationError::InvalidLimitValues));
    }

    #[test]
    fn schedule_requires_both_times_in_order() {
        let mut f = form();
        f.set_toggle(Toggle::Schedule, true);
        f.start = "10:00".to_string();
        f.end = String::new();
        assert_eq!(f.validate(), Err(ValidationError::MissingScheduleValues));

        f.end = "09:00".to_string();
        assert_eq!(f.validate(), Err(ValidationError::ScheduleOutOfOrder));

        f.end = "10:00".to_string();
        assert_eq!(f.validate(), Err(ValidationError::ScheduleOutOfOrder));

        f.end = "10:30".to_string();
        assert!(f.validate().is_ok());
    }

    #[test]
    fn schedule_rejects_garbage_times() {
        let mut f = form();
        f.set_toggle(Toggle::Schedule, true);
        f.start = "soon".to_string();
        f.end = "later".to_string();
        assert_eq!(f.validate(), Err(ValidationError::InvalidScheduleValues));
    }

    #[test]
    fn accepted_payload_sends_numbers_and_explicit_nulls() {
        let mut f = form();
        f.set_toggle(Toggle::Api, true);
        f.set_toggle(Toggle::Limit, true);
        f.number = "100".to_string();
        f.rate = "5".to_string();

        let update = f.validate().unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "endpoint": "/users",
                "toggles": {"api": true, "tracer": false, "limit": true, "schedule": false},
                "limitValues": {"number": 100, "rate": 5},
                "scheduleValues": {"start": null, "end": null},
            })
        );
    }

    #[test]
    fn turning_a_toggle_off_clears_its_values() {
        let mut f = form();
        f.set_toggle(Toggle::Limit, true);
        f.number = "100".to_string();
        f.rate = "5".to_string();
        f.set_toggle(Toggle::Limit, false);
        assert!(f.number.is_empty());
        assert!(f.rate.is_empty());

        f.set_toggle(Toggle::Schedule, true);
        f.start = "09:00".to_string();
        f.end = "17:00".to_string();
        f.set_toggle(Toggle::Schedule, false);
        assert!(f.start.is_empty());
        assert!(f.end.is_empty());
    }

    #[test]
    fn values_left_from_a_disabled_toggle_are_not_sent() {
        let mut f = form();
        f.number = "100".to_string();
        f.rate = "5".to_string();
        let update = f.validate().unwrap();
        assert_eq!(update.limit_values, LimitValues::default());
    }

    #[test]
    fn prefills_from_stored_configuration() {
        let config = ControlConfig {
            endpoint: "/users".to_string(),
            toggles: Toggles {
                api: true,
                limit: true,
                ..Toggles::default()
            },
            limit_values: Some(LimitValues {
                number: Some(100),
                rate: Some(5),
            }),
            schedule_values: None,
            ..ControlConfig::default()
        };
        let f = ControlsForm::for_endpoint("/users", Some(&config));
        assert!(f.toggles.api);
        assert_eq!(f.number, "100");
        assert_eq!(f.rate, "5");
        assert!(f.start.is_empty());
    }

    #[test]
    fn seconds_granularity_times_are_accepted() {
        let mut f = form();
        f.set_toggle(Toggle::Schedule, true);
        f.start = "09:00:30".to_string();
        f.end = "17:00".to_string();
        assert!(f.validate().is_ok());
    }
}
