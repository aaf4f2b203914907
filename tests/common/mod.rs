#![allow(dead_code)]

use async_trait::async_trait;
use payment_options::application::registry::ProviderRegistry;
use payment_options::domain::payment_option::PaymentOption;
use payment_options::domain::ports::{LookupError, ProviderLookup};
use std::time::Duration;

pub fn profile(id: &str) -> PaymentOption {
    PaymentOption::new(
        format!("acct-{id}"),
        "Active",
        "1000",
        format!("https://sampleurl.com/{id}.jpg"),
    )
}

/// Answers with a fixed profile after `delay`.
pub struct FixedProvider {
    pub delay: Duration,
    pub option: PaymentOption,
}

#[async_trait]
impl ProviderLookup for FixedProvider {
    async fn fetch(&self) -> Result<Option<PaymentOption>, LookupError> {
        if self.delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Some(self.option.clone()))
    }
}

/// Answers, but with nothing to report.
pub struct SilentProvider;

#[async_trait]
impl ProviderLookup for SilentProvider {
    async fn fetch(&self) -> Result<Option<PaymentOption>, LookupError> {
        tokio::task::yield_now().await;
        Ok(None)
    }
}

pub struct FailingProvider;

#[async_trait]
impl ProviderLookup for FailingProvider {
    async fn fetch(&self) -> Result<Option<PaymentOption>, LookupError> {
        Err(LookupError::Unavailable("maintenance window".to_string()))
    }
}

pub struct PanickingProvider;

#[async_trait]
impl ProviderLookup for PanickingProvider {
    async fn fetch(&self) -> Result<Option<PaymentOption>, LookupError> {
        panic!("provider blew up");
    }
}

pub fn fixed(id: &str, delay_ms: u64) -> FixedProvider {
    FixedProvider {
        delay: Duration::from_millis(delay_ms),
        option: profile(id),
    }
}

/// Registry of `ids`, where the ones listed in `silent` report no result.
pub fn registry_with_silent(ids: &[&str], silent: &[&str]) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    for id in ids {
        if silent.contains(id) {
            registry.register(*id, SilentProvider);
        } else {
            registry.register(*id, fixed(id, 0));
        }
    }
    registry
}

pub const WALLETS: [&str; 7] = [
    "ovo",
    "dana",
    "gopay",
    "shopeepay",
    "oneklik",
    "bridd",
    "linkaja",
];
