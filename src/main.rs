use std::sync::Arc;

use anyhow::Context;
use rental_pricing::cache::{start_cache_warmer, AppCache};
use rental_pricing::config::Config;
use rental_pricing::db::{BookingStore, MemoryStore, PgStore};
use rental_pricing::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rental_pricing=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("loading configuration")?;

    let store: Arc<dyn BookingStore> = match (&config.database_url, &config.seed_file) {
        (Some(url), _) => {
            tracing::info!("Using Postgres booking store");
            Arc::new(PgStore::connect(url).await.context("connecting to Postgres")?)
        }
        (None, Some(path)) => {
            tracing::info!("Using in-memory booking store seeded from {}", path.display());
            Arc::new(MemoryStore::from_file(path)?)
        }
        (None, None) => {
            tracing::info!("Using in-memory booking store with demo data");
            Arc::new(MemoryStore::demo()?)
        }
    };

    let cache = AppCache::new();
    tokio::spawn(start_cache_warmer(
        cache.clone(),
        store.clone(),
        config.cache_warm_interval,
    ));

    let state = AppState {
        store,
        cache,
        fee_rates: config.fee_rates,
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!(
        "Listening on {} (cleaning fee {}, service fee {})",
        config.bind_addr,
        config.fee_rates.cleaning_rate,
        config.fee_rates.service_rate
    );

    axum::serve(listener, app(state)).await?;
    Ok(())
}
