//! Inbound adapters exposing the aggregator to callers.

pub mod http;
