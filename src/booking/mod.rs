//! Booking pricing and availability.
//!
//! The pure pieces (`dates`, `availability`, `calculators`, `quote`) know
//! nothing about storage or HTTP. `services` resolves records through the
//! cache and booking store; `routes` exposes everything over HTTP/JSON.

pub mod availability;
pub mod calculators;
pub mod dates;
pub mod errors;
pub mod quote;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use availability::{
    is_date_unavailable, Availability, AvailabilityChecker, AvailabilityWindow, CalendarDay,
};
pub use calculators::{
    calculate_price, format_money, round_money, to_cents, FeeRates, LineItem, PriceBreakdown,
    PriceQuote,
};
pub use dates::{is_past_date, is_past_date_on, nights_between, DateRange};
pub use quote::{build_quote, BookingQuote, BookingSelection};
pub use routes::router;
pub use errors::BookingError;
