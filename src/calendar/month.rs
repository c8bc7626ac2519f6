use chrono::{Datelike, Local, NaiveDate};

/// A calendar month, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    year: i32,
    month: u32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl YearMonth {
    /// `None` when `month` is outside 1..=12 or the year is not representable.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let last_day = next_month.pred_opt()?;

        Some(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    pub fn of(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    /// The month the local clock is in.
    pub fn current() -> Option<Self> {
        Self::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }

    /// True when `[start, end]` shares at least one day with this month.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.last_day && end >= self.first_day
    }

    /// e.g. "January 2024"
    pub fn title(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2024, 4).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2024, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
    }

    #[test]
    fn overlap_and_containment() {
        let jan = YearMonth::new(2024, 1).unwrap();
        let d = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();

        assert!(jan.contains(d(1, 31)));
        assert!(!jan.contains(d(2, 1)));
        assert!(jan.overlaps(NaiveDate::from_ymd_opt(2023, 12, 28).unwrap(), d(1, 1)));
        assert!(jan.overlaps(d(1, 31), d(2, 3)));
        assert!(!jan.overlaps(d(2, 1), d(2, 3)));
        assert_eq!(jan.title(), "January 2024");
    }
}
