//! Booking service functions with store access.
//!
//! These resolve ids through the cache and booking store, then hand the
//! records to the pure calculators.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::cache::AppCache;
use crate::db::BookingStore;
use crate::error::Result;

use super::availability::{Availability, AvailabilityChecker, CalendarDay};
use super::calculators::FeeRates;
use super::dates::{nights_between, DateRange};
use super::errors::BookingError;
use super::quote::{build_quote, BookingQuote, BookingSelection};
use super::requests::QuoteRequest;

/// Longest span a single calendar request may cover
pub const MAX_CALENDAR_DAYS: u32 = 366;

/// Longest stay a quote will price
pub const MAX_STAY_NIGHTS: u32 = 366;

/// Quote a booking form selection.
///
/// Unset ids and dates degrade to the empty quote; ids that do not resolve
/// and stays longer than [`MAX_STAY_NIGHTS`] are errors.
pub async fn quote_booking(
    store: &dyn BookingStore,
    cache: &AppCache,
    rates: &FeeRates,
    request: &QuoteRequest,
    today: NaiveDate,
) -> Result<BookingQuote> {
    if let (Some(start), Some(end)) = (request.start_date, request.end_date) {
        let nights = nights_between(start, end);
        if nights > MAX_STAY_NIGHTS {
            return Err(BookingError::StayTooLong {
                nights,
                max: MAX_STAY_NIGHTS,
            }
            .into());
        }
    }

    let property = match request.property_id {
        Some(id) => Some(
            cache
                .property(store, id)
                .await?
                .ok_or(BookingError::UnknownProperty(id))?,
        ),
        None => None,
    };

    let customer = match request.customer_id {
        Some(id) => Some(
            store
                .find_customer(id)
                .await?
                .ok_or(BookingError::UnknownCustomer(id))?,
        ),
        None => None,
    };

    let booked = match &property {
        Some(property) => cache.booked_ranges(store, property.id).await?,
        None => Default::default(),
    };

    let selection = BookingSelection {
        property: property.map(|p| (*p).clone()),
        customer,
        start_date: request.start_date,
        end_date: request.end_date,
    };

    let quote = build_quote(selection, &booked, rates, today);
    tracing::debug!(
        "Quoted property={:?} nights={} total={}",
        request.property_id,
        quote.total_nights,
        quote.total_amount
    );
    Ok(quote)
}

/// Availability of one day for one property
pub async fn check_date(
    store: &dyn BookingStore,
    cache: &AppCache,
    property_id: Uuid,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<Availability> {
    let property = cache
        .property(store, property_id)
        .await?
        .ok_or(BookingError::UnknownProperty(property_id))?;
    let booked = cache.booked_ranges(store, property_id).await?;

    Ok(AvailabilityChecker::new(property.window(), &booked, today).check(date))
}

/// Per-day availability of a property over `span`
pub async fn property_calendar(
    store: &dyn BookingStore,
    cache: &AppCache,
    property_id: Uuid,
    span: DateRange,
    today: NaiveDate,
) -> Result<Vec<CalendarDay>> {
    let days = span.len_days();
    if days > MAX_CALENDAR_DAYS {
        return Err(BookingError::SpanTooLong {
            days,
            max: MAX_CALENDAR_DAYS,
        }
        .into());
    }

    let property = cache
        .property(store, property_id)
        .await?
        .ok_or(BookingError::UnknownProperty(property_id))?;
    let booked = cache.booked_ranges(store, property_id).await?;

    Ok(AvailabilityChecker::new(property.window(), &booked, today).calendar(span))
}
