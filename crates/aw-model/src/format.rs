//! Timestamp parsing and display formatting shared by the views.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, Timelike};

pub(crate) const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a backend timestamp. RFC 3339 is the wire format; a bare
/// `YYYY-MM-DDTHH:MM:SS` is tolerated and read as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok().or_else(|| {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

/// The viewer-local calendar date of a backend timestamp.
pub fn local_date(value: &str) -> Option<NaiveDate> {
    Some(parse_timestamp(value)?.with_timezone(&Local).date_naive())
}

/// Trace-card timestamp, e.g. `"07-03-2024 - 1:05 pm"`.
pub fn trace_timestamp(value: &str) -> Option<String> {
    let local = parse_timestamp(value)?.with_timezone(&Local);
    let (is_pm, hour) = local.hour12();
    Some(format!(
        "{:02}-{:02}-{} - {}:{:02} {}",
        local.day(),
        local.month(),
        local.year(),
        hour,
        local.minute(),
        if is_pm { "pm" } else { "am" }
    ))
}

/// Stat-tile datetime, e.g. `"Mar 7, 03:12 PM"`.
pub fn short_datetime(value: &str) -> Option<String> {
    let local = parse_timestamp(value)?.with_timezone(&Local);
    let (is_pm, hour) = local.hour12();
    let month = MONTH_ABBR[(local.month() - 1) as usize];
    Some(format!(
        "{} {}, {:02}:{:02} {}",
        month,
        local.day(),
        hour,
        local.minute(),
        if is_pm { "PM" } else { "AM" }
    ))
}

/// Table date, e.g. `"07/03/2024"`.
pub fn short_date(value: &str) -> Option<String> {
    let local = parse_timestamp(value)?.with_timezone(&Local);
    Some(format!(
        "{:02}/{:02}/{}",
        local.day(),
        local.month(),
        local.year()
    ))
}

/// Compact display of large counts: `1_234_567` -> `"1.2M"`,
/// `5_300` -> `"5.3k"`, small values unchanged.
pub fn compact_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Round to one decimal place for percentage and millisecond displays.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local_rfc3339(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> String {
        Local
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .to_rfc3339()
    }

    #[test]
    fn parses_rfc3339_and_bare_timestamps() {
        assert!(parse_timestamp("2024-03-07T10:00:00.000Z").is_some());
        assert!(parse_timestamp("2024-03-07T10:00:00+05:30").is_some());
        assert!(parse_timestamp("2024-03-07T10:00:00").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn trace_timestamp_uses_twelve_hour_clock() {
        let afternoon = local_rfc3339(2024, 3, 7, 13, 5);
        assert_eq!(
            trace_timestamp(&afternoon).unwrap(),
            "07-03-2024 - 1:05 pm"
        );

        let midnight = local_rfc3339(2024, 3, 7, 0, 9);
        assert_eq!(trace_timestamp(&midnight).unwrap(), "07-03-2024 - 12:09 am");
    }

    #[test]
    fn short_datetime_pads_the_hour() {
        let ts = local_rfc3339(2024, 10, 5, 15, 12);
        assert_eq!(short_datetime(&ts).unwrap(), "Oct 5, 03:12 PM");
    }

    #[test]
    fn short_date_is_day_first() {
        let ts = local_rfc3339(2024, 3, 7, 10, 0);
        assert_eq!(short_date(&ts).unwrap(), "07/03/2024");
    }

    #[test]
    fn compact_number_scales_thousands_and_millions() {
        assert_eq!(compact_number(1_234_567.0), "1.2M");
        assert_eq!(compact_number(5_300.0), "5.3k");
        assert_eq!(compact_number(999.0), "999");
        assert_eq!(compact_number(12.5), "12.5");
        assert_eq!(compact_number(0.0), "0");
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(99.94), 99.9);
        assert_eq!(round1(99.95), 100.0);
        assert_eq!(round1(0.0), 0.0);
    }
}
