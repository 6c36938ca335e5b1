//! HTTP client for the item API.

pub mod client;
pub mod dto;
pub mod settings;
