//! Postgres-backed booking store.
//!
//! Read-only queries against the `properties`, `customers` and `bookings`
//! tables described in `sql/schema.sql`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::booking::DateRange;
use crate::error::Result;
use crate::models::{Customer, Property};

use super::BookingStore;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a small pool against `database_url`
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl BookingStore for PgStore {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT id, name, location, max_guests, nightly_price,
                   available_from, available_to
            FROM properties
            WHERE deleted_at IS NULL
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(properties)
    }

    async fn find_property(&self, id: Uuid) -> Result<Option<Property>> {
        let property = sqlx::query_as::<_, Property>(
            r#"
            SELECT id, name, location, max_guests, nightly_price,
                   available_from, available_to
            FROM properties
            WHERE id = $1
              AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(property)
    }

    async fn find_customer(&self, id: Uuid) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn booked_ranges(&self, property_id: Uuid) -> Result<Vec<DateRange>> {
        let rows = sqlx::query_as::<_, (NaiveDate, NaiveDate)>(
            r#"
            SELECT check_in, check_out
            FROM bookings
            WHERE property_id = $1
              AND status <> 'cancelled'
            ORDER BY check_in
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;

        let ranges = rows
            .into_iter()
            .filter_map(|(check_in, check_out)| match DateRange::new(check_in, check_out) {
                Ok(range) => Some(range),
                Err(e) => {
                    tracing::warn!("Skipping booking on property {}: {}", property_id, e);
                    None
                }
            })
            .collect();

        Ok(ranges)
    }
}
