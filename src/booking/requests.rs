//! Request DTOs for booking API endpoints.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer};
use uuid::Uuid;

/// Booking form selection, as JSON body or query string.
///
/// Every field is optional; blank values (as submitted by an untouched
/// form field) count as unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteRequest {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub property_id: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub customer_id: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub end_date: Option<NaiveDate>,
}

/// Request to check a single calendar day
#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    pub property_id: Uuid,
    pub date: NaiveDate,
}

/// Query parameters for the availability calendar
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
