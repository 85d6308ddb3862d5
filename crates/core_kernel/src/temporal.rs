//! Calendar math for ages and contract tenors
//!
//! This module provides the date arithmetic the validation layer depends on:
//! - Exact age breakdown in years, months and days
//! - Month arithmetic for projecting contract end dates
//! - Lenient parsing of backend-supplied timestamp strings

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// An exact age expressed as completed years, months and days
///
/// Field order matters: the derived ordering compares years first, then
/// months, then days, which is exactly how final-age ceilings are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl AgeBreakdown {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self { years, months, days }
    }
}

/// Computes the exact age attained at `at` for someone born on `birth`
///
/// Returns a zero breakdown when `at` precedes `birth`; malformed input is
/// never an error in this engine.
pub fn age_between(birth: NaiveDate, at: NaiveDate) -> AgeBreakdown {
    if at <= birth {
        return AgeBreakdown::new(0, 0, 0);
    }

    let mut years = at.year() - birth.year();
    let mut months = at.month() as i32 - birth.month() as i32;
    let mut days = at.day() as i32 - birth.day() as i32;

    if days < 0 {
        let prev_month_len = days_in_previous_month(at);
        days += prev_month_len as i32;
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    AgeBreakdown::new(years.max(0) as u32, months as u32, days as u32)
}

/// Computes the age in completed years at `at`
pub fn age_in_years(birth: NaiveDate, at: NaiveDate) -> u32 {
    age_between(birth, at).years
}

/// Adds `months` calendar months to a date, clamping day-of-month
///
/// Saturates at the calendar bounds rather than failing; a tenor long
/// enough to overflow chrono's range is far past any insurability ceiling.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Parses a backend timestamp string leniently
///
/// The proposal API emits timestamps in more than one shape depending on the
/// upstream system; anything unparseable is `None`, never an error, and the
/// caller excludes it from aggregation.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    None
}

fn days_in_previous_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    days_in_month(year, month)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next.and_then(|d| d.pred_opt()) {
        Some(last_day) => last_day.day(),
        None => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_between_exact_birthday() {
        let age = age_between(date(1980, 5, 10), date(2020, 5, 10));
        assert_eq!(age, AgeBreakdown::new(40, 0, 0));
    }

    #[test]
    fn test_age_between_day_before_birthday() {
        let age = age_between(date(1980, 5, 10), date(2020, 5, 9));
        assert_eq!(age.years, 39);
        assert_eq!(age.months, 11);
        assert_eq!(age.days, 29);
    }

    #[test]
    fn test_age_between_day_after_birthday() {
        let age = age_between(date(1980, 5, 10), date(2020, 5, 11));
        assert_eq!(age, AgeBreakdown::new(40, 0, 1));
    }

    #[test]
    fn test_age_between_borrows_month_length() {
        // Born on the 31st, measured on March 1st: borrows February's length.
        let age = age_between(date(1990, 1, 31), date(2020, 3, 1));
        assert_eq!(age.years, 30);
        assert_eq!(age.months, 1);
        assert_eq!(age.days, 1);
    }

    #[test]
    fn test_age_between_before_birth_is_zero() {
        let age = age_between(date(2000, 1, 1), date(1990, 1, 1));
        assert_eq!(age, AgeBreakdown::new(0, 0, 0));
    }

    #[test]
    fn test_age_breakdown_ordering_prioritizes_years() {
        assert!(AgeBreakdown::new(81, 0, 0) > AgeBreakdown::new(80, 11, 30));
        assert!(AgeBreakdown::new(80, 1, 0) > AgeBreakdown::new(80, 0, 29));
        assert!(AgeBreakdown::new(80, 0, 1) > AgeBreakdown::new(80, 0, 0));
    }

    #[test]
    fn test_add_months_clamps_day() {
        // Jan 31 + 1 month lands on the last day of February.
        assert_eq!(add_months(date(2021, 1, 31), 1), date(2021, 2, 28));
        assert_eq!(add_months(date(2020, 1, 31), 1), date(2020, 2, 29));
    }

    #[test]
    fn test_add_months_whole_years() {
        assert_eq!(add_months(date(2020, 6, 15), 240), date(2040, 6, 15));
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let parsed = parse_timestamp("2024-03-01T10:30:00-03:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T13:30:00+00:00");
    }

    #[test]
    fn test_parse_timestamp_naive_formats() {
        assert!(parse_timestamp("2024-03-01T10:30:00").is_some());
        assert!(parse_timestamp("2024-03-01 10:30:00").is_some());
        assert!(parse_timestamp("2024-03-01").is_some());
    }

    #[test]
    fn test_parse_timestamp_garbage_is_none() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("2024-13-99").is_none());
    }
}
