//! wynnxp - Browse game items ranked by XP bonus.
//!
//! Fetches the full item list from the item API, keeps it in a local cache
//! for 24 hours, groups items into categories and flags the ones another
//! item of equal or lower level beats on guaranteed XP.
//!
//! # Architecture
//!
//! - [`domain`] - Item records, tiers, categories and classification (pure)
//! - [`port`] - Traits for the item source, storage, clock and display
//! - [`application`] - Cache, view building, countdown and fetch orchestration
//! - [`adapter`] - The HTTP client, stores and the command-line interface
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Expose test builders and fakes to integration tests
//!
//! # Example
//!
//! ```
//! use wynnxp::domain::classify::categorize;
//! use wynnxp::domain::item::ItemMap;
//!
//! let items: ItemMap = serde_json::from_str(
//!     r#"{"Gale's Sight": {"type": "weapon", "weaponType": "bow"}}"#,
//! ).unwrap();
//! let classification = categorize(&items);
//! assert_eq!(classification.get("bow").map(<[_]>::len), Some(1));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
