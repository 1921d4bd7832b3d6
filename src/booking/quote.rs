//! Booking form coordinator.
//!
//! Turns the current form selection into the values the booking form shows:
//! selected property and customer, night count, total and price breakdown.
//! Recomputed from scratch on every change; nothing here holds state.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Customer, Property};

use super::availability::{AvailabilityChecker, CalendarDay};
use super::calculators::{calculate_price, FeeRates, PriceQuote};
use super::dates::{nights_between, DateRange};

/// Snapshot of the booking form inputs
#[derive(Debug, Clone, Default)]
pub struct BookingSelection {
    pub property: Option<Property>,
    pub customer: Option<Customer>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl BookingSelection {
    /// Stay dates when both are set and the end is after the start
    pub fn stay(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start < end => Some((start, end)),
            _ => None,
        }
    }
}

/// Values derived from a [`BookingSelection`]
#[derive(Debug, Clone)]
pub struct BookingQuote {
    pub selected_property: Option<Property>,
    pub selected_customer: Option<Customer>,
    pub total_nights: u32,
    pub total_amount: Decimal,
    pub price: PriceQuote,
    /// Nights of the stay that cannot be booked
    pub conflicts: Vec<CalendarDay>,
}

impl BookingQuote {
    pub fn is_bookable(&self) -> bool {
        self.selected_property.is_some()
            && self.selected_customer.is_some()
            && !self.price.is_empty()
            && self.conflicts.is_empty()
    }
}

/// Derive the quote for `selection`.
///
/// Missing property, missing dates, or `start >= end` all give zero nights,
/// a zero total and [`PriceQuote::NothingSelected`].
pub fn build_quote(
    selection: BookingSelection,
    booked: &[DateRange],
    rates: &FeeRates,
    today: NaiveDate,
) -> BookingQuote {
    let priced = match (&selection.property, selection.stay()) {
        (Some(property), Some((start, end))) => {
            let nights = nights_between(start, end);
            let price = calculate_price(property.nightly_price, nights, rates);
            let conflicts =
                AvailabilityChecker::new(property.window(), booked, today).stay_conflicts(start, end);
            Some((nights, price, conflicts))
        }
        _ => None,
    };

    let (total_nights, price, conflicts) =
        priced.unwrap_or((0, PriceQuote::NothingSelected, Vec::new()));

    BookingQuote {
        selected_property: selection.property,
        selected_customer: selection.customer,
        total_nights,
        total_amount: price.total(),
        price,
        conflicts,
    }
}
