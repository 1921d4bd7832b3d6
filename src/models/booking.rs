//! Existing reservations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A reservation as held by the booking store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub property_id: Uuid,
    pub customer_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
}

impl Booking {
    /// Cancelled bookings free their dates
    pub fn blocks_dates(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }

    /// Occupied days, inclusive of both stored dates.
    ///
    /// `None`, with a warning, when the stored dates are inverted.
    pub fn booked_range(&self) -> Option<DateRange> {
        match DateRange::new(self.check_in, self.check_out) {
            Ok(range) => Some(range),
            Err(e) => {
                tracing::warn!("Skipping booking {} on property {}: {}", self.id, self.property_id, e);
                None
            }
        }
    }
}
