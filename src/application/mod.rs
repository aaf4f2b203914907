//! Application layer orchestrating provider lookups.
//!
//! `ProviderRegistry` declares which providers exist and `Aggregator` queries
//! them concurrently, using `tokio` tasks and a channel so that each task owns
//! its own state and the result set is only assembled by the caller.

pub mod aggregator;
pub mod registry;
