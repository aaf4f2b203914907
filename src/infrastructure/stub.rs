use crate::application::registry::ProviderRegistry;
use crate::domain::payment_option::PaymentOption;
use crate::domain::ports::{LookupError, ProviderLookup};
use async_trait::async_trait;
use std::time::Duration;

/// A provider that answers with a fixed profile after a simulated latency.
///
/// Stands in for a real upstream call; it never fails.
#[derive(Debug, Clone)]
pub struct StubProvider {
    latency: Duration,
    profile: Option<PaymentOption>,
}

impl StubProvider {
    pub fn new(latency: Duration, profile: PaymentOption) -> Self {
        Self {
            latency,
            profile: Some(profile),
        }
    }

    /// A stub that waits and then reports no result.
    pub fn empty(latency: Duration) -> Self {
        Self {
            latency,
            profile: None,
        }
    }
}

#[async_trait]
impl ProviderLookup for StubProvider {
    async fn fetch(&self) -> Result<Option<PaymentOption>, LookupError> {
        tokio::time::sleep(self.latency).await;
        Ok(self.profile.clone())
    }
}

// (identity, latency ms, account, balance)
const CATALOG: [(&str, u64, &str, &str); 7] = [
    ("ovo", 200, "628812345678", "10000"),
    ("dana", 150, "628823456789", "15000"),
    ("gopay", 180, "628834567890", "25000"),
    ("shopeepay", 160, "628845678901", "30000"),
    ("oneklik", 170, "628856789012", "50000"),
    ("bridd", 190, "628867890123", "100000"),
    ("linkaja", 210, "628878901234", "75000"),
];

/// Registry with every built-in wallet and bank-linked provider.
pub fn builtin_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    for (id, latency_ms, account, balance) in CATALOG {
        let profile = PaymentOption::new(
            account,
            "Active",
            balance,
            format!("https://sampleurl.com/{id}.jpg"),
        );
        registry.register(id, StubProvider::new(Duration::from_millis(latency_ms), profile));
    }
    registry
}
