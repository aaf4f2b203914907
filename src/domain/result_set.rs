use super::payment_option::{PaymentOption, ProviderId};
use serde::Serialize;
use std::collections::HashMap;

/// Payment options keyed by provider, as collected for one request.
///
/// Only the aggregator can add entries; once handed out the set is read-only.
/// Providers that produced nothing are absent rather than present with a
/// placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    entries: HashMap<ProviderId, PaymentOption>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, id: ProviderId, option: PaymentOption) {
        self.entries.insert(id, option);
    }

    pub fn get(&self, id: &str) -> Option<&PaymentOption> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ProviderId> {
        self.entries.keys()
    }
}

impl FromIterator<(ProviderId, PaymentOption)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (ProviderId, PaymentOption)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (id, option) in iter {
            set.insert(id, option);
        }
        set
    }
}
