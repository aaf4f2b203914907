//! Domain model for payment-option aggregation.
//!
//! Holds the value types shared by every layer and the `ProviderLookup` port
//! that concrete providers implement.

pub mod payment_option;
pub mod ports;
pub mod response;
pub mod result_set;
