//! Day grouping for the trace-log view.

use chrono::NaiveDate;

use crate::format::local_date;
use crate::types::LogEntry;

/// One day's worth of traces under a shared heading.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceGroup {
    pub date: NaiveDate,
    pub label: String,
    pub entries: Vec<LogEntry>,
}

/// Heading for a calendar date: `"Today"`, `"Yesterday"`, else
/// `"07/03/2024"`. Decided by calendar-date equality, not wall-clock
/// delta.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.pred_opt() {
        "Yesterday".to_string()
    } else {
        date.format("%d/%m/%Y").to_string()
    }
}

/// An entry's representative local date: the timestamp of its first
/// nested log line. Entries without one are not representable in the
/// day view.
pub fn entry_date(entry: &LogEntry) -> Option<NaiveDate> {
    local_date(&entry.logs.first()?.timestamp)
}

/// Group traces by the calendar day of their first log line. Entries
/// lacking a usable timestamp are silently dropped; within a group the
/// server order is preserved. Groups come back newest-first so "Today"
/// always leads regardless of arrival order.
pub fn group_by_day(entries: Vec<LogEntry>, today: NaiveDate) -> Vec<TraceGroup> {
    let mut groups: Vec<TraceGroup> = Vec::new();
    for entry in entries {
        let Some(date) = entry_date(&entry) else {
            continue;
        };
        match groups.iter_mut().find(|group| group.date == date) {
            Some(group) => group.entries.push(entry),
            None => groups.push(TraceGroup {
                date,
                label: day_label(date, today),
                entries: vec![entry],
            }),
        }
    }
    groups.sort_by(|a, b| b.date.cmp(&a.date));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogLine;
    use chrono::{Duration, Local, TimeZone};

    fn entry_on(trace_id: &str, days_ago: i64) -> LogEntry {
        let at = Local.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap() - Duration::days(days_ago);
        LogEntry {
            trace_id: trace_id.to_string(),
            logs: vec![LogLine {
                timestamp: at.to_rfc3339(),
                kind: "info".to_string(),
                message: "ok".to_string(),
            }],
            ..LogEntry::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    #[test]
    fn labels_today_yesterday_and_dates() {
        assert_eq!(day_label(today(), today()), "Today");
        assert_eq!(day_label(today().pred_opt().unwrap(), today()), "Yesterday");
        assert_eq!(
            day_label(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(), today()),
            "07/03/2024"
        );
    }

    #[test]
    fn groups_by_first_log_line_date() {
        let groups = group_by_day(
            vec![entry_on("a", 0), entry_on("b", 1), entry_on("c", 0)],
            today(),
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Today");
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[0].entries[0].trace_id, "a");
        assert_eq!(groups[0].entries[1].trace_id, "c");
        assert_eq!(groups[1].label, "Yesterday");
    }

    #[test]
    fn entries_without_log_lines_are_dropped() {
        let bare = LogEntry {
            trace_id: "bare".to_string(),
            ..LogEntry::default()
        };
        let unparsable = LogEntry {
            trace_id: "junk".to_string(),
            logs: vec![LogLine {
                timestamp: "not a date".to_string(),
                ..LogLine::default()
            }],
            ..LogEntry::default()
        };
        let groups = group_by_day(vec![bare, entry_on("a", 0), unparsable], today());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries.len(), 1);
        assert_eq!(groups[0].entries[0].trace_id, "a");
    }

    #[test]
    fn groups_are_ordered_newest_first() {
        let groups = group_by_day(
            vec![entry_on("old", 5), entry_on("yday", 1), entry_on("now", 0)],
            today(),
        );
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["Today", "Yesterday", "15/03/2024"]);
    }

    #[test]
    fn regrouping_flattened_groups_is_identity() {
        let groups = group_by_day(
            vec![
                entry_on("a", 1),
                entry_on("b", 0),
                entry_on("c", 1),
                entry_on("d", 3),
            ],
            today(),
        );
        let flattened: Vec<LogEntry> = groups
            .iter()
            .flat_map(|g| g.entries.iter().cloned())
            .collect();
        assert_eq!(group_by_day(flattened, today()), groups);
    }
}
