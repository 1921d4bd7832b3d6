//! Property records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::booking::AvailabilityWindow;

/// Rental property, pricing-relevant fields plus what a listing shows
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub max_guests: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub nightly_price: Decimal,
    pub available_from: NaiveDate,
    pub available_to: NaiveDate,
}

impl Property {
    pub fn window(&self) -> AvailabilityWindow {
        AvailabilityWindow::new(self.available_from, self.available_to)
    }
}
