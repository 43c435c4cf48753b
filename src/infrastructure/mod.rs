//! Host-side stand-ins for the ports: in-memory stores and the return URL builder.

pub mod in_memory;
pub mod return_urls;
