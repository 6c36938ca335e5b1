//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`item`] - Builders for item records and small item maps.
//! - [`clock`] - A manually advanced [`Clock`](crate::port::outbound::clock::Clock).
//! - [`presenter`] - A [`Presenter`](crate::port::outbound::presenter::Presenter)
//!   that records everything it is asked to show.
//! - [`source`] - A scripted [`ItemSource`](crate::port::outbound::source::ItemSource).
//! - [`store`] - An in-memory [`KeyValueStore`](crate::port::outbound::store::KeyValueStore).

pub mod clock;
pub mod item;
pub mod presenter;
pub mod source;
pub mod store;
