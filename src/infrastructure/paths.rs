//! Path utilities for wynnxp.
//!
//! All data lives under `~/.wynnxp/`:
//! - `~/.wynnxp/config.toml` - optional configuration
//! - `~/.wynnxp/store/` - persisted item cache

use std::path::PathBuf;

/// Returns the wynnxp home directory (`~/.wynnxp/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wynnxp")
}

/// Returns the default config file path (`~/.wynnxp/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default store directory (`~/.wynnxp/store/`).
pub fn default_store_dir() -> PathBuf {
    home_dir().join("store")
}
