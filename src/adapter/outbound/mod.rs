//! Outbound adapters (driven side).

pub mod api;
pub mod store;
