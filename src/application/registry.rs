use crate::domain::payment_option::ProviderId;
use crate::domain::ports::{ProviderLookup, ProviderLookupRef};
use std::collections::HashMap;
use std::sync::Arc;

/// Declarative mapping from provider identity to its lookup.
///
/// The aggregator queries exactly the providers registered here; adding a
/// provider never touches the aggregator itself.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderId, ProviderLookupRef>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `lookup` under `id`, replacing any previous lookup for it.
    pub fn register<L>(&mut self, id: impl Into<ProviderId>, lookup: L) -> &mut Self
    where
        L: ProviderLookup + 'static,
    {
        self.providers.insert(id.into(), Arc::new(lookup));
        self
    }

    pub fn register_shared(
        &mut self,
        id: impl Into<ProviderId>,
        lookup: ProviderLookupRef,
    ) -> &mut Self {
        self.providers.insert(id.into(), lookup);
        self
    }

    /// Keeps only the providers named in `enabled`.
    ///
    /// Names with no registered lookup are reported and otherwise ignored.
    pub fn retain<S: AsRef<str>>(mut self, enabled: &[S]) -> Self {
        for name in enabled {
            if !self.providers.contains_key(name.as_ref()) {
                tracing::warn!(
                    provider = name.as_ref(),
                    "unknown provider in configuration, ignoring"
                );
            }
        }
        self.providers
            .retain(|id, _| enabled.iter().any(|name| name.as_ref() == id.as_str()));
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.providers.contains_key(id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&ProviderId, &ProviderLookupRef)> {
        self.providers.iter()
    }
}
