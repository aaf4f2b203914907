//! Adapters behind the domain ports and process-lifecycle resources.

#[cfg(feature = "storage-mysql")]
pub mod mysql;
pub mod stub;

#[cfg(not(feature = "storage-mysql"))]
pub mod mysql {
    use crate::config::DatabasesConfig;

    /// Placeholder used when the `storage-mysql` feature is disabled.
    #[derive(Default)]
    pub struct DatabaseManager;

    impl DatabaseManager {
        pub async fn connect(_config: &DatabasesConfig) -> Self {
            tracing::warn!(
                "persistent storage requested but the 'storage-mysql' feature is not enabled; skipping database connections"
            );
            Self
        }

        pub async fn close(&self) {}
    }
}
