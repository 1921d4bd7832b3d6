//! Booking store: where properties, customers and booked ranges come from.

use async_trait::async_trait;
use uuid::Uuid;

use crate::booking::DateRange;
use crate::error::Result;
use crate::models::{Customer, Property};

mod memory;
mod queries;

pub use memory::{MemoryStore, SeedData};
pub use queries::PgStore;

/// Read-only access to the records pricing and availability depend on
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// All properties, ordered by name
    async fn list_properties(&self) -> Result<Vec<Property>>;
    /// A single property by id
    async fn find_property(&self, id: Uuid) -> Result<Option<Property>>;
    /// A single customer by id
    async fn find_customer(&self, id: Uuid) -> Result<Option<Customer>>;
    /// Date ranges held by non-cancelled bookings of a property
    async fn booked_ranges(&self, property_id: Uuid) -> Result<Vec<DateRange>>;
}
