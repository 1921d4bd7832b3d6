//! In-memory booking store seeded from a JSON fixture.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::booking::DateRange;
use crate::error::{AppError, Result};
use crate::models::{Booking, Customer, Property};

use super::BookingStore;

/// Demo records bundled with the binary
const DEMO_SEED: &str = include_str!("../../data/seed.json");

/// Shape of a seed fixture
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    properties: HashMap<Uuid, Property>,
    customers: HashMap<Uuid, Customer>,
    bookings: Vec<Booking>,
}

impl MemoryStore {
    pub fn new(seed: SeedData) -> Self {
        Self {
            properties: seed.properties.into_iter().map(|p| (p.id, p)).collect(),
            customers: seed.customers.into_iter().map(|c| (c.id, c)).collect(),
            bookings: seed.bookings,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let seed: SeedData =
            serde_json::from_str(json).map_err(|e| AppError::Seed(e.to_string()))?;
        Ok(Self::new(seed))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::Seed(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Store preloaded with the bundled demo properties and bookings
    pub fn demo() -> Result<Self> {
        Self::from_json(DEMO_SEED)
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        let mut properties: Vec<Property> = self.properties.values().cloned().collect();
        properties.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(properties)
    }

    async fn find_property(&self, id: Uuid) -> Result<Option<Property>> {
        Ok(self.properties.get(&id).cloned())
    }

    async fn find_customer(&self, id: Uuid) -> Result<Option<Customer>> {
        Ok(self.customers.get(&id).cloned())
    }

    async fn booked_ranges(&self, property_id: Uuid) -> Result<Vec<DateRange>> {
        let mut ranges: Vec<DateRange> = self
            .bookings
            .iter()
            .filter(|b| b.property_id == property_id && b.blocks_dates())
            .filter_map(Booking::booked_range)
            .collect();
        ranges.sort_by_key(|range| range.from());
        Ok(ranges)
    }
}
