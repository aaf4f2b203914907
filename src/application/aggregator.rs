use super::registry::ProviderRegistry;
use crate::domain::payment_option::{PaymentOption, ProviderId};
use crate::domain::result_set::ResultSet;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

/// Fans out one lookup per registered provider and gathers the results.
///
/// Each lookup runs as its own `tokio` task and reports back over a channel,
/// so no lock is shared between tasks. The aggregator is stateless between
/// calls and can be shared behind an `Arc`.
pub struct Aggregator {
    registry: Arc<ProviderRegistry>,
    lookup_timeout: Option<Duration>,
}

impl Aggregator {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            lookup_timeout: None,
        }
    }

    /// Sets a deadline for each individual lookup.
    ///
    /// A lookup that misses the deadline counts as having no result. `None`
    /// waits for every lookup however long it takes.
    pub fn with_lookup_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Queries every registered provider concurrently.
    ///
    /// Returns once every spawned lookup has finished. Providers that return
    /// nothing, fail, time out or panic are left out of the result.
    pub async fn collect(&self) -> ResultSet {
        if self.registry.is_empty() {
            return ResultSet::new();
        }

        let (tx, mut rx) = mpsc::unbounded_channel::<(ProviderId, PaymentOption)>();
        let mut tasks = JoinSet::new();
        let mut task_providers = HashMap::with_capacity(self.registry.len());

        for (id, lookup) in self.registry.iter() {
            let id = id.clone();
            let lookup = Arc::clone(lookup);
            let tx = tx.clone();
            let timeout = self.lookup_timeout;

            // `tx` moves into the task and is dropped on every exit path,
            // including unwinding, which is what closes the channel below.
            let task_id = id.clone();
            let handle = tasks.spawn(async move {
                let outcome = match timeout {
                    Some(limit) => match tokio::time::timeout(limit, lookup.fetch()).await {
                        Ok(outcome) => outcome,
                        Err(_) => {
                            tracing::warn!(provider = %id, ?limit, "lookup timed out");
                            return;
                        }
                    },
                    None => lookup.fetch().await,
                };

                match outcome {
                    Ok(Some(option)) => {
                        tracing::debug!(provider = %id, "lookup succeeded");
                        let _ = tx.send((id, option));
                    }
                    Ok(None) => tracing::debug!(provider = %id, "lookup returned no result"),
                    Err(e) => tracing::warn!(provider = %id, error = %e, "lookup failed"),
                }
            });
            task_providers.insert(handle.id(), task_id);
        }
        drop(tx);

        let mut results = ResultSet::new();
        while let Some((id, option)) = rx.recv().await {
            results.insert(id, option);
        }

        // The channel is closed, so all results are in; joining only reports
        // tasks that did not finish cleanly.
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                let provider = task_providers
                    .get(&e.id())
                    .map(ProviderId::as_str)
                    .unwrap_or("unknown");
                tracing::warn!(
                    provider,
                    panicked = e.is_panic(),
                    error = %e,
                    "lookup task failed"
                );
            }
        }
        results
    }
}
