//! Calendar-month selection and the server-fallback reconciliation policy.

use chrono::{Datelike, NaiveDate};

use crate::format::MONTH_ABBR;

/// One calendar month, the unit of selection for the Home and Analytics
/// views. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Period reported back by the server, if it reported one. A month
    /// outside 1..=12 counts as no fallback info.
    pub fn from_parts(year: Option<i32>, month: Option<u32>) -> Option<Self> {
        let (year, month) = (year?, month?);
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn prev(self) -> Self {
        if self.month <= 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month >= 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Selector label, e.g. `"Mar 2024"`.
    pub fn label(&self) -> String {
        let idx = (self.month.clamp(1, 12) - 1) as usize;
        format!("{} {}", MONTH_ABBR[idx], self.year)
    }

    /// Query-string form used by all period-scoped requests: four-digit
    /// year, zero-padded month.
    pub fn query(&self) -> String {
        format!("year={:04}&month={:02}", self.year, self.month)
    }
}

/// Outcome of comparing a requested period against what the server
/// answered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Display the payload as returned, including legitimately empty data.
    Accept,
    /// Display the payload and move the month selector to the returned
    /// period. Only happens on initial load.
    Retarget(Period),
    /// The server substituted a different period after an explicit user
    /// choice: discard the payload and show the empty state.
    Reject,
}

/// Decide what to do with a period-scoped response.
///
/// On initial load a fallback is accepted and the selector follows the
/// data; once the user has made an explicit choice, silently substituted
/// data would be misleading, so a mismatched period clears the view. A
/// response that reports no period is treated as having no fallback info.
pub fn reconcile(
    requested: Period,
    returned: Option<Period>,
    initial_load: bool,
) -> Reconciliation {
    let Some(returned) = returned else {
        return Reconciliation::Accept;
    };
    if returned == requested {
        return Reconciliation::Accept;
    }
    if initial_load {
        Reconciliation::Retarget(returned)
    } else {
        Reconciliation::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_and_next_cross_year_boundaries() {
        assert_eq!(Period::new(2024, 1).prev(), Period::new(2023, 12));
        assert_eq!(Period::new(2023, 12).next(), Period::new(2024, 1));
        assert_eq!(Period::new(2024, 6).prev(), Period::new(2024, 5));
        assert_eq!(Period::new(2024, 6).next(), Period::new(2024, 7));
    }

    #[test]
    fn label_and_query_formatting() {
        let period = Period::new(2024, 3);
        assert_eq!(period.label(), "Mar 2024");
        assert_eq!(period.query(), "year=2024&month=03");
        assert_eq!(Period::new(2024, 11).query(), "year=2024&month=11");
    }

    #[test]
    fn from_parts_requires_both_fields_and_a_real_month() {
        assert_eq!(
            Period::from_parts(Some(2024), Some(3)),
            Some(Period::new(2024, 3))
        );
        assert_eq!(Period::from_parts(None, Some(3)), None);
        assert_eq!(Period::from_parts(Some(2024), None), None);
        assert_eq!(Period::from_parts(Some(2024), Some(0)), None);
        assert_eq!(Period::from_parts(Some(2024), Some(13)), None);
    }

    #[test]
    fn initial_load_accepts_matching_period() {
        let requested = Period::new(2024, 3);
        assert_eq!(
            reconcile(requested, Some(requested), true),
            Reconciliation::Accept
        );
    }

    #[test]
    fn initial_load_retargets_on_fallback() {
        let requested = Period::new(2024, 3);
        let returned = Period::new(2024, 1);
        assert_eq!(
            reconcile(requested, Some(returned), true),
            Reconciliation::Retarget(returned)
        );
    }

    #[test]
    fn user_selection_rejects_fallback_period() {
        let requested = Period::new(2024, 3);
        assert_eq!(
            reconcile(requested, Some(Period::new(2024, 1)), false),
            Reconciliation::Reject
        );
    }

    #[test]
    fn user_selection_accepts_matching_or_absent_period() {
        let requested = Period::new(2024, 3);
        assert_eq!(
            reconcile(requested, Some(requested), false),
            Reconciliation::Accept
        );
        assert_eq!(reconcile(requested, None, false), Reconciliation::Accept);
    }
}
