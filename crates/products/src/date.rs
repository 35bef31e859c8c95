use core::str::FromStr;

use chrono::{Datelike, NaiveDate};

use shelflife_core::{DomainError, ValueObject};

/// `strftime` pattern of the wire format (`DD-MM-YYYY`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub(crate) const INVALID_DATE_FORMAT: &str = "invalid date format";

/// Years that fit the four-digit wire format.
pub const YEAR_RANGE: core::ops::RangeInclusive<i32> = 1..=9999;

/// Calendar date written as `DD-MM-YYYY` on the wire (e.g. `10-09-2024`).
///
/// Parsing is strict: two-digit day and month, four-digit year, `-`
/// separators and nothing else. chrono alone would also accept unpadded
/// fields and signed years, so the shape is checked before the calendar is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductDate(NaiveDate);

impl ProductDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl ValueObject for ProductDate {}

impl From<NaiveDate> for ProductDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl From<ProductDate> for NaiveDate {
    fn from(value: ProductDate) -> Self {
        value.0
    }
}

impl FromStr for ProductDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !has_fixed_shape(s) {
            return Err(DomainError::validation(INVALID_DATE_FORMAT));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .ok()
            .filter(|date| YEAR_RANGE.contains(&date.year()))
            .map(Self)
            .ok_or_else(|| DomainError::validation(INVALID_DATE_FORMAT))
    }
}

impl core::fmt::Display for ProductDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0.format(DATE_FORMAT), f)
    }
}

/// `DD-MM-YYYY`: digits everywhere except the two separators.
fn has_fixed_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_zero_padded_day_month_year() {
        let date: ProductDate = "10-09-2024".parse().unwrap();
        assert_eq!(date.as_naive(), ymd(2024, 9, 10));
    }

    #[test]
    fn parses_leap_day() {
        let date: ProductDate = "29-02-2024".parse().unwrap();
        assert_eq!(date.as_naive(), ymd(2024, 2, 29));
    }

    #[test]
    fn renders_in_wire_format() {
        assert_eq!(ProductDate::new(ymd(2025, 1, 5)).to_string(), "05-01-2025");
    }

    #[test]
    fn accepts_first_and_last_four_digit_years() {
        assert_eq!("01-01-0001".parse::<ProductDate>().unwrap().as_naive(), ymd(1, 1, 1));
        assert_eq!("31-12-9999".parse::<ProductDate>().unwrap().to_string(), "31-12-9999");
    }

    #[test]
    fn rejects_malformed_text() {
        let cases = [
            "",
            "2024-09-10",
            "10/09/2024",
            "10.09.2024",
            "1-9-2024",
            "10-9-2024",
            "10-09-24",
            "aa-bb-cccc",
            "10-09-2024 ",
            " 10-09-2024",
            "10-09-2024x",
            "10-09-+024",
            "32-01-2024",
            "00-01-2024",
            "10-13-2024",
            "10-00-2024",
            "29-02-2023",
            "31-04-2024",
            "10-09",
            "01-01-0000",
            "29-02-0000",
            "١٠-٠٩-٢٠٢٤",
        ];

        for case in cases {
            let err = case.parse::<ProductDate>().unwrap_err();
            assert_eq!(
                err,
                DomainError::validation("invalid date format"),
                "expected {case:?} to be rejected"
            );
        }
    }
}
