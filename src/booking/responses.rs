//! Response DTOs for booking API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::cache::CacheStats;
use crate::models::{Customer, Property};

use super::availability::{Availability, CalendarDay};
use super::calculators::{format_money, to_cents, LineItem, PriceBreakdown, PriceQuote};
use super::quote::BookingQuote;

/// Money value for JSON responses: exact amount plus its display form
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub display: String,
}

impl From<Decimal> for MoneyResponse {
    fn from(amount: Decimal) -> Self {
        Self {
            amount,
            display: format_money(amount),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LineItemResponse {
    pub label: String,
    pub amount: MoneyResponse,
}

impl From<&LineItem> for LineItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            label: item.label.clone(),
            amount: item.amount.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub nights: u32,
    pub nightly_price: MoneyResponse,
    pub line_items: Vec<LineItemResponse>,
    pub total: MoneyResponse,
}

impl From<&PriceBreakdown> for BreakdownResponse {
    fn from(breakdown: &PriceBreakdown) -> Self {
        Self {
            nights: breakdown.nights,
            nightly_price: breakdown.nightly_price.into(),
            line_items: breakdown.line_items.iter().map(Into::into).collect(),
            total: breakdown.total.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    /// Nothing to price yet; show a placeholder
    Empty,
    Priced,
}

/// Response for a booking quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub status: QuoteStatus,
    pub property: Option<Property>,
    pub customer: Option<Customer>,
    pub total_nights: u32,
    /// Rounded to cents
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    pub breakdown: Option<BreakdownResponse>,
    pub conflicts: Vec<CalendarDay>,
    pub bookable: bool,
}

impl From<BookingQuote> for QuoteResponse {
    fn from(quote: BookingQuote) -> Self {
        let status = match quote.price {
            PriceQuote::NothingSelected => QuoteStatus::Empty,
            PriceQuote::Priced(_) => QuoteStatus::Priced,
        };
        Self {
            status,
            bookable: quote.is_bookable(),
            property: quote.selected_property,
            breakdown: quote.price.breakdown().map(Into::into),
            total_amount: to_cents(quote.total_amount),
            total_nights: quote.total_nights,
            customer: quote.selected_customer,
            conflicts: quote.conflicts,
        }
    }
}

/// Response for a single-day availability check
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub property_id: Uuid,
    pub date: NaiveDate,
    pub available: bool,
    pub reason: Availability,
}

/// Response for an availability calendar
#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub property_id: Uuid,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cache: CacheStats,
}

/// Error body for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}
