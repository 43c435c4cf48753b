//! Gateway value types and the host-facing ports.

pub mod callback;
pub mod coerce;
pub mod order;
pub mod ports;
pub mod request;
pub mod settings;
pub mod transaction;
