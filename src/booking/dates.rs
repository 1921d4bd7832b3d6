//! Calendar date helpers for stays.
//!
//! Everything here works on `NaiveDate` calendar days. "Today" is always an
//! explicit argument except in [`is_past_date`], which reads the local clock.

use chrono::{Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize};

use super::errors::BookingError;

/// Number of nights between check-in and check-out.
///
/// Returns 0 when `check_out <= check_in`, never a negative count.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rental_pricing::booking::nights_between;
///
/// let check_in = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
/// assert_eq!(nights_between(check_in, check_out), 3);
/// assert_eq!(nights_between(check_out, check_in), 0);
/// ```
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = check_out.signed_duration_since(check_in).num_days();
    if days <= 0 {
        return 0;
    }
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// True when `date` falls on a calendar day strictly before `today`.
pub fn is_past_date_on(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// True when `date` is strictly before today's local calendar day.
pub fn is_past_date(date: NaiveDate) -> bool {
    is_past_date_on(date, today())
}

/// Today's calendar day in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A span of calendar days with `from <= to`.
///
/// Booked ranges treat both ends as occupied; see [`DateRange::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            from: NaiveDate,
            to: NaiveDate,
        }

        let raw = Raw::deserialize(deserializer)?;
        DateRange::new(raw.from, raw.to).map_err(de::Error::custom)
    }
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, BookingError> {
        if from > to {
            return Err(BookingError::InvertedRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// A range covering a single day.
    pub fn single(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Inclusive at both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Every day in the range, `from` through `to`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }

    /// Number of days covered, counting both ends.
    pub fn len_days(&self) -> u32 {
        nights_between(self.from, self.to) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== nights_between tests ====================

    #[test]
    fn test_nights_between_same_day_is_zero() {
        let d = date(2026, 3, 14);
        assert_eq!(nights_between(d, d), 0);
    }

    #[test]
    fn test_nights_between_counts_whole_days() {
        assert_eq!(nights_between(date(2026, 3, 14), date(2026, 3, 17)), 3);
        // across a month boundary
        assert_eq!(nights_between(date(2026, 1, 30), date(2026, 2, 2)), 3);
        // across a leap day
        assert_eq!(nights_between(date(2028, 2, 28), date(2028, 3, 1)), 2);
    }

    #[test]
    fn test_nights_between_inverted_clamps_to_zero() {
        assert_eq!(nights_between(date(2026, 3, 17), date(2026, 3, 14)), 0);
    }

    // ==================== is_past_date tests ====================

    #[test]
    fn test_is_past_date_today_is_not_past() {
        assert!(!is_past_date(today()));
    }

    #[test]
    fn test_is_past_date_yesterday_is_past() {
        let yesterday = today().pred_opt().unwrap();
        assert!(is_past_date(yesterday));
    }

    #[test]
    fn test_is_past_date_on_explicit_today() {
        let t = date(2026, 10, 19);
        assert!(is_past_date_on(date(2026, 10, 18), t));
        assert!(!is_past_date_on(t, t));
        assert!(!is_past_date_on(date(2026, 10, 20), t));
    }

    // ==================== DateRange tests ====================

    #[test]
    fn test_date_range_rejects_inverted() {
        let err = DateRange::new(date(2026, 5, 2), date(2026, 5, 1)).unwrap_err();
        assert!(matches!(err, BookingError::InvertedRange { .. }));
    }

    #[test]
    fn test_date_range_contains_is_inclusive() {
        let range = DateRange::new(date(2026, 5, 1), date(2026, 5, 3)).unwrap();
        assert!(range.contains(date(2026, 5, 1)));
        assert!(range.contains(date(2026, 5, 3)));
        assert!(!range.contains(date(2026, 4, 30)));
        assert!(!range.contains(date(2026, 5, 4)));
    }

    #[test]
    fn test_date_range_overlaps() {
        let a = DateRange::new(date(2026, 5, 1), date(2026, 5, 3)).unwrap();
        let b = DateRange::new(date(2026, 5, 3), date(2026, 5, 6)).unwrap();
        let c = DateRange::new(date(2026, 5, 4), date(2026, 5, 6)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_date_range_days() {
        let range = DateRange::new(date(2026, 5, 30), date(2026, 6, 2)).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], date(2026, 5, 30));
        assert_eq!(days[3], date(2026, 6, 2));
        assert_eq!(range.len_days(), 4);
        assert_eq!(DateRange::single(date(2026, 5, 30)).days().count(), 1);
    }

    #[test]
    fn test_date_range_deserialize_validates() {
        let ok: DateRange =
            serde_json::from_str(r#"{"from":"2026-05-01","to":"2026-05-03"}"#).unwrap();
        assert_eq!(ok.from(), date(2026, 5, 1));

        let bad = serde_json::from_str::<DateRange>(r#"{"from":"2026-05-03","to":"2026-05-01"}"#);
        assert!(bad.is_err());
    }
}
