//! Application configuration.
//!
//! Values are layered: built-in defaults, then an optional file passed on the
//! command line, then environment variables prefixed with `PAYMENT_OPTIONS`
//! using `__` between nested keys, e.g. `PAYMENT_OPTIONS__SERVER__PORT=9000`.
//! A `.env` file is honoured when present.

mod database;
mod server;

pub use database::{DatabaseConfig, DatabasesConfig};
pub use server::ServerConfig;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "PAYMENT_OPTIONS";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub aggregator: AggregatorConfig,

    #[serde(default)]
    pub databases: DatabasesConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregatorConfig {
    /// Subset of built-in providers to query. All of them when unset.
    #[serde(default)]
    pub enabled_providers: Option<Vec<String>>,

    /// Per-lookup deadline in milliseconds. Lookups are never cut short when
    /// unset.
    #[serde(default)]
    pub lookup_timeout_ms: Option<u64>,
}

impl AggregatorConfig {
    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> Result<()> {
        if self.lookup_timeout_ms == Some(0) {
            return Err(Error::InvalidConfig(
                "aggregator.lookup_timeout_ms must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Loads and validates configuration, reading `path` first if given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let config: AppConfig = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("aggregator.enabled_providers"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.aggregator.validate()
    }
}
