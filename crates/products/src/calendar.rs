//! Calendar-aware date differences.
//!
//! chrono gives flat day counts (`NaiveDate - NaiveDate`) but no
//! year/month/day breakdown, so the breakdown is derived here by stepping whole
//! months with end-of-month clamping (`checked_add_months`).

use chrono::{Datelike, Months, NaiveDate};

use shelflife_core::{DomainError, DomainResult, ValueObject};

/// Signed difference `to - from` split into whole years, whole months (after
/// removing years) and days (after removing months).
///
/// All three components share the sign of the difference.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CalendarDelta {
    pub years: i32,
    pub months: i32,
    pub days: i64,
}

impl ValueObject for CalendarDelta {}

impl CalendarDelta {
    /// Decompose `to - from`.
    ///
    /// The month count is the largest (toward zero) number of whole months
    /// that can be added to `from` without passing `to`; the remainder is
    /// expressed in days.
    pub fn between(to: NaiveDate, from: NaiveDate) -> DomainResult<Self> {
        let mut total_months =
            (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
        let mut anchor = shift_months(from, total_months)?;

        if to < from {
            while to > anchor {
                total_months += 1;
                anchor = shift_months(from, total_months)?;
            }
        } else {
            while to < anchor {
                total_months -= 1;
                anchor = shift_months(from, total_months)?;
            }
        }

        Ok(Self {
            years: total_months / 12,
            months: total_months % 12,
            days: (to - anchor).num_days(),
        })
    }

    /// Whole months ignoring the year split (`months + 12 * years`).
    pub fn total_months(&self) -> i32 {
        self.months + 12 * self.years
    }
}

/// Add a signed number of calendar months, clamping the day to the end of the
/// target month.
pub(crate) fn shift_months(date: NaiveDate, months: i32) -> DomainResult<NaiveDate> {
    let step = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    };
    shifted.ok_or_else(|| DomainError::validation("date out of supported range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_date_is_zero() {
        let d = ymd(2025, 6, 15);
        assert_eq!(CalendarDelta::between(d, d).unwrap(), CalendarDelta::default());
    }

    #[test]
    fn forward_difference_in_whole_months() {
        let delta = CalendarDelta::between(ymd(2025, 9, 10), ymd(2025, 3, 10)).unwrap();
        assert_eq!(delta, CalendarDelta { years: 0, months: 6, days: 0 });
    }

    #[test]
    fn forward_difference_borrows_days_from_months() {
        // Anchor 10-08 + 1 month would overshoot 05-09.
        let delta = CalendarDelta::between(ymd(2025, 9, 5), ymd(2025, 3, 10)).unwrap();
        assert_eq!(delta, CalendarDelta { years: 0, months: 5, days: 26 });
    }

    #[test]
    fn backward_difference_is_negative_in_every_component() {
        let delta = CalendarDelta::between(ymd(2024, 9, 10), ymd(2025, 10, 15)).unwrap();
        assert_eq!(delta, CalendarDelta { years: -1, months: -1, days: -5 });
        assert_eq!(delta.total_months(), -13);
    }

    #[test]
    fn month_end_anchor_is_clamped() {
        // 28-02 + 1 month = 28-03, three days short of 31-03.
        let delta = CalendarDelta::between(ymd(2025, 3, 31), ymd(2025, 2, 28)).unwrap();
        assert_eq!(delta, CalendarDelta { years: 0, months: 1, days: 3 });
    }

    #[test]
    fn shift_months_clamps_leap_day() {
        assert_eq!(shift_months(ymd(2024, 2, 29), 12).unwrap(), ymd(2025, 2, 28));
        assert_eq!(shift_months(ymd(2024, 3, 31), -1).unwrap(), ymd(2024, 2, 29));
    }
}
