use super::payment_option::PaymentOption;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by a provider lookup.
///
/// Distinct from `Ok(None)`, which means the provider answered but had nothing
/// to report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("upstream error: {0}")]
    Upstream(String),
}

/// Fetches the current payment option for one provider.
///
/// Implementations carry their own identity and upstream details; the
/// aggregator only ever calls `fetch`.
#[async_trait]
pub trait ProviderLookup: Send + Sync {
    async fn fetch(&self) -> Result<Option<PaymentOption>, LookupError>;
}

pub type ProviderLookupRef = Arc<dyn ProviderLookup>;
