//! Application layer: the gateway adapter and the processor that drives it
//! against the host stores.
//!
//! `GatewayAdapter` is pure and synchronous. `PaymentProcessor` loads the
//! transaction and order through the async ports, hands them to the adapter and
//! persists whatever the adapter changed.

pub mod adapter;
pub mod engine;
