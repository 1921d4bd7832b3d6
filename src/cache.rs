//! In-memory caching using moka
//!
//! Property records and booked ranges are read on every calendar render and
//! quote, so both are cached in front of the booking store.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::booking::DateRange;
use crate::db::BookingStore;
use crate::error::Result;
use crate::models::Property;

/// Application cache holding property records and their booked ranges
#[derive(Clone)]
pub struct AppCache {
    /// Properties (id -> Property)
    pub properties: Cache<Uuid, Arc<Property>>,
    /// Booked ranges per property (property id -> ranges)
    pub booked_ranges: Cache<Uuid, Arc<Vec<DateRange>>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Properties: 1000 entries, 30 min TTL, 10 min idle
            properties: Cache::builder()
                .max_capacity(1_000)
                .time_to_live(Duration::from_secs(30 * 60))
                .time_to_idle(Duration::from_secs(10 * 60))
                .build(),

            // Booked ranges change whenever a booking lands, keep them short-lived
            booked_ranges: Cache::builder()
                .max_capacity(1_000)
                .time_to_live(Duration::from_secs(60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            properties_size: self.properties.entry_count(),
            booked_ranges_size: self.booked_ranges.entry_count(),
        }
    }

    /// Property by id, from cache or store
    pub async fn property(&self, store: &dyn BookingStore, id: Uuid) -> Result<Option<Arc<Property>>> {
        if let Some(cached) = self.properties.get(&id).await {
            debug!("Cache HIT for property: {}", id);
            return Ok(Some(cached));
        }

        debug!("Cache MISS for property: {}", id);
        let Some(property) = store.find_property(id).await? else {
            return Ok(None);
        };
        let property = Arc::new(property);
        self.properties.insert(id, property.clone()).await;
        Ok(Some(property))
    }

    /// Booked ranges of a property, from cache or store
    pub async fn booked_ranges(
        &self,
        store: &dyn BookingStore,
        property_id: Uuid,
    ) -> Result<Arc<Vec<DateRange>>> {
        if let Some(cached) = self.booked_ranges.get(&property_id).await {
            debug!("Cache HIT for booked ranges: {}", property_id);
            return Ok(cached);
        }

        debug!("Cache MISS for booked ranges: {}", property_id);
        let ranges = Arc::new(store.booked_ranges(property_id).await?);
        self.booked_ranges.insert(property_id, ranges.clone()).await;
        Ok(ranges)
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub properties_size: u64,
    pub booked_ranges_size: u64,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes every `every`.
pub async fn start_cache_warmer(cache: AppCache, store: Arc<dyn BookingStore>, every: Duration) {
    let mut interval = interval(every);
    loop {
        interval.tick().await;
        warm_cache(&cache, store.as_ref()).await;
    }
}

/// Load every property record into the cache
async fn warm_cache(cache: &AppCache, store: &dyn BookingStore) {
    info!("Starting cache warm-up...");

    match store.list_properties().await {
        Ok(properties) => {
            for property in properties {
                cache.properties.insert(property.id, Arc::new(property)).await;
            }
        }
        Err(e) => warn!("Failed to warm property cache: {}", e),
    }

    cache.properties.run_pending_tasks().await;
    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}
