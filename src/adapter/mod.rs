//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: the command-line interface
//! - [`outbound`] - Driven side: item API client and key-value stores

pub mod inbound;
pub mod outbound;
