//! Shaping of the daily uptime series for the area chart.

use crate::types::ChartPoint;

/// One plotted day. `label` is the tooltip date, `DD-MM-YYYY`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub day: u32,
    pub label: String,
    pub uptime_percent: f64,
}

/// Reshape the server series for plotting. The day of month is taken
/// from the ISO date string textually (`split('T')`, then `split('-')`)
/// rather than through timezone-aware parsing, so a `...T00:00:00.000Z`
/// date never shifts a day in non-UTC viewers. Malformed dates are
/// skipped; uptime is clamped to 0..=100 for display.
pub fn shape(points: &[ChartPoint]) -> Vec<ChartDatum> {
    points.iter().filter_map(shape_point).collect()
}

fn shape_point(point: &ChartPoint) -> Option<ChartDatum> {
    let date_part = point.date.split('T').next()?;
    let mut parts = date_part.split('-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day_str = parts.next()?;
    let day: u32 = day_str.parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }
    Some(ChartDatum {
        day,
        label: format!("{day_str}-{month}-{year}"),
        uptime_percent: point.uptime_percent.clamp(0.0, 100.0),
    })
}
