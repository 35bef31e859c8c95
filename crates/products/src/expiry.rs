use chrono::{Datelike, NaiveDate, NaiveDateTime};

use shelflife_core::{DomainError, DomainResult, ValueObject};

use crate::calendar::{CalendarDelta, shift_months};
use crate::date::{INVALID_DATE_FORMAT, ProductDate, YEAR_RANGE};

/// Fixed shelf life applied to every product.
pub const SHELF_LIFE_MONTHS: i32 = 12;

/// Where a product stands relative to its expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpiryStatus {
    NotExpired,
    Expired,
    ExpiresToday,
}

impl ExpiryStatus {
    /// Verdict for an expiry date observed on `today`.
    pub fn classify(expiry_date: NaiveDate, today: NaiveDate) -> Self {
        match expiry_date.cmp(&today) {
            core::cmp::Ordering::Greater => ExpiryStatus::NotExpired,
            core::cmp::Ordering::Less => ExpiryStatus::Expired,
            core::cmp::Ordering::Equal => ExpiryStatus::ExpiresToday,
        }
    }

    /// Stable machine-readable code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::NotExpired => "NOT_EXPIRED",
            ExpiryStatus::Expired => "EXPIRED",
            ExpiryStatus::ExpiresToday => "EXPIRES_TODAY",
        }
    }

    /// Customer-facing message (Portuguese).
    pub fn message(&self) -> &'static str {
        match self {
            ExpiryStatus::NotExpired => "Não excedeu o prazo de validade!",
            ExpiryStatus::Expired => "Excedeu o prazo de validade!",
            ExpiryStatus::ExpiresToday => "Excede o prazo de validade hoje!",
        }
    }
}

impl core::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expiry report for one product, computed against a given "now".
///
/// Every remaining quantity is an absolute value; whether the expiry date lies
/// ahead or behind is carried by [`ExpiryStatus`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryReport {
    product: String,
    manufacture_date: ProductDate,
    expiry_date: ProductDate,
    days_remaining: u64,
    weeks_remaining: u64,
    months_remaining: u32,
    years_remaining: u32,
    status: ExpiryStatus,
}

impl ValueObject for ExpiryReport {}

impl ExpiryReport {
    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn manufacture_date(&self) -> ProductDate {
        self.manufacture_date
    }

    pub fn expiry_date(&self) -> ProductDate {
        self.expiry_date
    }

    /// Flat day count between the expiry date and today.
    pub fn days_remaining(&self) -> u64 {
        self.days_remaining
    }

    pub fn weeks_remaining(&self) -> u64 {
        self.weeks_remaining
    }

    /// Calendar months between the expiry date and today, years folded in.
    ///
    /// Derived from the calendar decomposition, not from `days_remaining`, so
    /// the two can disagree around month boundaries.
    pub fn months_remaining(&self) -> u32 {
        self.months_remaining
    }

    pub fn years_remaining(&self) -> u32 {
        self.years_remaining
    }

    pub fn status(&self) -> ExpiryStatus {
        self.status
    }
}

/// Expiry date under the fixed shelf-life policy.
///
/// Fails when the expiry date no longer fits `DD-MM-YYYY` (past year 9999).
pub fn expiry_date_for(manufacture_date: NaiveDate) -> DomainResult<NaiveDate> {
    let expiry_date = shift_months(manufacture_date, SHELF_LIFE_MONTHS)?;
    if !YEAR_RANGE.contains(&expiry_date.year()) {
        return Err(DomainError::validation(INVALID_DATE_FORMAT));
    }
    Ok(expiry_date)
}

/// Compute the expiry report for `product` manufactured on
/// `manufacture_date_text` (`DD-MM-YYYY`), as seen at `now`.
///
/// Only the calendar date of `now` is used. Fails with
/// `DomainError::Validation` when the date text is malformed.
pub fn compute(
    product: impl Into<String>,
    manufacture_date_text: &str,
    now: NaiveDateTime,
) -> DomainResult<ExpiryReport> {
    let manufacture_date: ProductDate = manufacture_date_text.parse()?;
    let expiry_date = expiry_date_for(manufacture_date.as_naive())?;
    let today = now.date();

    let delta = CalendarDelta::between(expiry_date, today)?;
    let days_remaining = (expiry_date - today).num_days().unsigned_abs();
    let years_remaining = delta.years.unsigned_abs();

    let report = ExpiryReport {
        product: product.into(),
        manufacture_date,
        expiry_date: ProductDate::new(expiry_date),
        days_remaining,
        weeks_remaining: days_remaining / 7,
        months_remaining: delta.total_months().unsigned_abs(),
        years_remaining,
        status: ExpiryStatus::classify(expiry_date, today),
    };

    tracing::debug!(
        product = %report.product,
        expiry_date = %report.expiry_date,
        status = %report.status,
        "expiry computed"
    );

    Ok(report)
}
