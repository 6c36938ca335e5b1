//! Application layer.
//!
//! Use cases built on the outbound ports:
//!
//! - [`cache`] - Expiring item cache over a key-value store
//! - [`countdown`] - Background countdown to the next refresh
//! - [`orchestrator`] - Load flow: cache, fetch, fallback, present
//! - [`view`] - Builds listing, summary and report records from a classification

pub mod cache;
pub mod countdown;
pub mod orchestrator;
pub mod view;
