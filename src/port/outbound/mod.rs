//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the item API, persistent storage, the wall
//! clock, and the display surface with the report records it draws.

pub mod clock;
pub mod presenter;
pub mod report;
pub mod source;
pub mod store;
