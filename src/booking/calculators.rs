//! Core booking price calculation.
//!
//! Pure functions for pricing math - no store access.
//! Amounts keep full `Decimal` precision; rounding happens only in
//! [`format_money`] and the response layer.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use rental_pricing::booking::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Display form of an amount: dollar sign, always two decimal places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use rental_pricing::booking::format_money;
///
/// assert_eq!(format_money(dec!(678)), "$678.00");
/// assert_eq!(format_money(dec!(30.005)), "$30.00");
/// ```
pub fn format_money(amount: Decimal) -> String {
    format!("${}", to_cents(amount))
}

/// Round to cents and fix the scale at two places, so `678` reads `678.00`.
pub fn to_cents(amount: Decimal) -> Decimal {
    let mut rounded = round_money(amount, 2);
    rounded.rescale(2);
    rounded
}

/// Fee percentages applied on top of the accommodation subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRates {
    /// Fraction of one night's rate charged once per booking.
    pub cleaning_rate: Decimal,
    /// Fraction of the accommodation subtotal.
    pub service_rate: Decimal,
}

impl Default for FeeRates {
    fn default() -> Self {
        Self {
            cleaning_rate: dec!(0.15),
            service_rate: dec!(0.08),
        }
    }
}

/// A labelled amount in a price breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub label: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Full breakdown for a stay with at least one night.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub nights: u32,
    pub nightly_price: Decimal,
    pub accommodation: Decimal,
    pub cleaning_fee: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
    /// Accommodation, cleaning fee, service fee - in that order.
    pub line_items: Vec<LineItem>,
}

/// Result of pricing a stay.
///
/// `NothingSelected` is its own state so callers render a placeholder
/// instead of a zero-dollar breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceQuote {
    NothingSelected,
    Priced(PriceBreakdown),
}

impl PriceQuote {
    pub fn total(&self) -> Decimal {
        match self {
            PriceQuote::NothingSelected => Decimal::ZERO,
            PriceQuote::Priced(breakdown) => breakdown.total,
        }
    }

    pub fn line_items(&self) -> &[LineItem] {
        match self {
            PriceQuote::NothingSelected => &[],
            PriceQuote::Priced(breakdown) => &breakdown.line_items,
        }
    }

    pub fn breakdown(&self) -> Option<&PriceBreakdown> {
        match self {
            PriceQuote::NothingSelected => None,
            PriceQuote::Priced(breakdown) => Some(breakdown),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PriceQuote::NothingSelected)
    }
}

fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

fn accommodation_label(nights: u32, nightly_price: Decimal) -> String {
    let unit = if nights == 1 { "night" } else { "nights" };
    format!("{} {} × {}", nights, unit, format_money(nightly_price))
}

/// Price a stay of `nights` at `nightly_price`.
///
/// Zero nights yields [`PriceQuote::NothingSelected`]. Negative prices and
/// rates are treated as zero.
pub fn calculate_price(nightly_price: Decimal, nights: u32, rates: &FeeRates) -> PriceQuote {
    if nights == 0 {
        return PriceQuote::NothingSelected;
    }

    let nightly_price = clamp_non_negative(nightly_price);
    let cleaning_rate = clamp_non_negative(rates.cleaning_rate);
    let service_rate = clamp_non_negative(rates.service_rate);

    let accommodation = nightly_price * Decimal::from(nights);
    let cleaning_fee = nightly_price * cleaning_rate;
    let service_fee = accommodation * service_rate;
    let total = accommodation + cleaning_fee + service_fee;

    let line_items = vec![
        LineItem {
            label: accommodation_label(nights, nightly_price),
            amount: accommodation,
        },
        LineItem {
            label: "Cleaning fee".to_string(),
            amount: cleaning_fee,
        },
        LineItem {
            label: "Service fee".to_string(),
            amount: service_fee,
        },
    ];

    PriceQuote::Priced(PriceBreakdown {
        nights,
        nightly_price,
        accommodation,
        cleaning_fee,
        service_fee,
        total,
        line_items,
    })
}
