use crate::config::{DatabaseConfig, DatabasesConfig};
use crate::error::Result;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::{Connection, MySql, Pool};
use std::str::FromStr;

/// Connection pools for the product and payment stores.
///
/// Pools are opened lazily and pinged once at startup. Nothing in the
/// aggregation path reads from them, so a store that is down only produces a
/// warning.
#[derive(Default)]
pub struct DatabaseManager {
    product: Option<MySqlPool>,
    payment: Option<MySqlPool>,
}

impl DatabaseManager {
    /// Opens both stores concurrently. Invalid settings or an unreachable
    /// store leave a warning in the log and never fail.
    pub async fn connect(config: &DatabasesConfig) -> Self {
        let (product, payment) = tokio::join!(
            open_pool("product", &config.product),
            open_pool("payment", &config.payment),
        );
        Self { product, payment }
    }

    pub fn product(&self) -> Option<&MySqlPool> {
        self.product.as_ref()
    }

    pub fn payment(&self) -> Option<&MySqlPool> {
        self.payment.as_ref()
    }

    pub async fn close(&self) {
        for pool in [&self.product, &self.payment].into_iter().flatten() {
            pool.close().await;
        }
    }
}

fn build_pool(config: &DatabaseConfig) -> Result<Pool<MySql>> {
    config.validate()?;
    let options = MySqlConnectOptions::from_str(&config.url)?;
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.max_lifetime())
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(options);
    Ok(pool)
}

async fn ping(pool: &MySqlPool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    Ok(())
}

async fn open_pool(name: &str, config: &DatabaseConfig) -> Option<MySqlPool> {
    let pool = match build_pool(config) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::warn!(database = name, error = %e, "could not configure database");
            return None;
        }
    };

    match ping(&pool).await {
        Ok(()) => tracing::info!(database = name, "connected to database"),
        Err(e) => tracing::warn!(database = name, error = %e, "could not connect to database"),
    }
    Some(pool)
}
