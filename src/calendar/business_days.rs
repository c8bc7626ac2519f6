use chrono::{Datelike, NaiveDate};

/// Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() < 5
}

/// Number of Monday-Friday days in the closed range `[start, end]`.
///
/// Holidays are not considered. Returns 0 when `end < start`.
pub fn count_business_days(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }

    let span = (end - start).num_days() + 1;
    let full_weeks = span / 7;
    let first = i64::from(start.weekday().num_days_from_monday());
    let remainder = (0..span % 7)
        .filter(|offset| (first + offset) % 7 < 5)
        .count() as i64;

    u32::try_from(full_weeks * 5 + remainder).unwrap_or(u32::MAX)
}
