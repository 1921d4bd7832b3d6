//! Booking error types shared by the date helpers and the services.

use axum::http::StatusCode;
use chrono::NaiveDate;
use uuid::Uuid;

/// Booking calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("No property with id {0}")]
    UnknownProperty(Uuid),

    #[error("No customer with id {0}")]
    UnknownCustomer(Uuid),

    #[error("Date range starts on {from} after it ends on {to}")]
    InvertedRange { from: NaiveDate, to: NaiveDate },

    #[error("Calendar span of {days} days exceeds the maximum of {max}")]
    SpanTooLong { days: u32, max: u32 },

    #[error("Stay of {nights} nights exceeds the maximum of {max}")]
    StayTooLong { nights: u32, max: u32 },
}

impl BookingError {
    pub fn error_type(&self) -> &'static str {
        match self {
            BookingError::UnknownProperty(_) => "unknown_property",
            BookingError::UnknownCustomer(_) => "unknown_customer",
            BookingError::InvertedRange { .. } => "inverted_range",
            BookingError::SpanTooLong { .. } => "span_too_long",
            BookingError::StayTooLong { .. } => "stay_too_long",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::UnknownProperty(_) | BookingError::UnknownCustomer(_) => {
                StatusCode::NOT_FOUND
            }
            BookingError::InvertedRange { .. }
            | BookingError::SpanTooLong { .. }
            | BookingError::StayTooLong { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}
