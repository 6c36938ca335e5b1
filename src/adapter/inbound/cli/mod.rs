//! CLI module graph.

pub mod cache;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod output;
pub mod presenter;
pub mod view;
