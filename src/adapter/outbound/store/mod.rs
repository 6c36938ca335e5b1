//! Key-value store adapters.

pub mod file;
