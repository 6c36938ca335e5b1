//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading, validation and logging setup
//! - [`paths`] - Default locations under `~/.wynnxp/`

pub mod bootstrap;
pub mod config;
pub mod paths;
