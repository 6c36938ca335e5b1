//! Configuration loading and validation.

pub mod display;
pub mod logging;
pub mod settings;
