//! Core domain types and pure classification logic.
//!
//! Nothing here performs I/O or knows about the clock.
//!
//! - [`item`] - Item records, stat values and the normalized XP bonus
//! - [`tier`] - Rarity tiers and their display colors
//! - [`category`] - Category assignment, ordering and display names
//! - [`classify`] - Grouping, level ordering and competitiveness flags

pub mod category;
pub mod classify;
pub mod item;
pub mod tier;
