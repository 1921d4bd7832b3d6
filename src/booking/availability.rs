//! Calendar availability for a single property.
//!
//! Pure predicates, cheap enough to run once per calendar cell.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::{self, is_past_date_on, DateRange};

/// The `[available_from, available_to]` span during which a property can be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub available_from: NaiveDate,
    pub available_to: NaiveDate,
}

impl AvailabilityWindow {
    pub fn new(available_from: NaiveDate, available_to: NaiveDate) -> Self {
        Self {
            available_from,
            available_to,
        }
    }

    /// Inclusive at both ends. An inverted window contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.available_from <= date && date <= self.available_to
    }
}

/// Outcome of an availability check, with the reason a day is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Past,
    OutsideWindow,
    Booked,
}

impl Availability {
    pub fn is_available(self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// One cell of an availability calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub availability: Availability,
}

/// Availability rules for one property, evaluated against a fixed "today".
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityChecker<'a> {
    window: AvailabilityWindow,
    booked: &'a [DateRange],
    today: NaiveDate,
}

impl<'a> AvailabilityChecker<'a> {
    pub fn new(window: AvailabilityWindow, booked: &'a [DateRange], today: NaiveDate) -> Self {
        Self {
            window,
            booked,
            today,
        }
    }

    /// Classify `date`. Rules are applied in order and the first match wins:
    /// past, outside the window, inside a booked range, otherwise available.
    pub fn check(&self, date: NaiveDate) -> Availability {
        if is_past_date_on(date, self.today) {
            return Availability::Past;
        }
        if !self.window.contains(date) {
            return Availability::OutsideWindow;
        }
        if self.booked.iter().any(|range| range.contains(date)) {
            return Availability::Booked;
        }
        Availability::Available
    }

    pub fn is_date_unavailable(&self, date: NaiveDate) -> bool {
        !self.check(date).is_available()
    }

    /// One cell per day of `span`, in date order.
    pub fn calendar(&self, span: DateRange) -> Vec<CalendarDay> {
        span.days()
            .map(|date| CalendarDay {
                date,
                availability: self.check(date),
            })
            .collect()
    }

    /// Blocked nights of a stay. The check-out day is not a night of the stay.
    pub fn stay_conflicts(&self, check_in: NaiveDate, check_out: NaiveDate) -> Vec<CalendarDay> {
        check_in
            .iter_days()
            .take_while(|date| *date < check_out)
            .map(|date| CalendarDay {
                date,
                availability: self.check(date),
            })
            .filter(|day| !day.availability.is_available())
            .collect()
    }
}

/// True when `date` cannot be selected, judged against today's local date.
pub fn is_date_unavailable(
    date: NaiveDate,
    window: AvailabilityWindow,
    booked: &[DateRange],
) -> bool {
    AvailabilityChecker::new(window, booked, dates::today()).is_date_unavailable(date)
}
