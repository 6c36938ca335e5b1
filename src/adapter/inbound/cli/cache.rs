//! Handlers for the `cache` command group.

use chrono::{DateTime, Utc};
use serde_json::json;

use super::output;
use crate::application::cache::CacheStatus;
use crate::application::countdown::format_remaining;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute `cache status`.
pub fn execute_status(config: &Config) -> Result<()> {
    let cache = bootstrap::build_cache(config);
    let status = cache.status()?;
    let last_update = cache.last_update();
    let dir = config.cache.resolved_dir();

    if output::is_json() {
        output::json_output(json!({
            "command": "cache.status",
            "dir": dir.display().to_string(),
            "last_update": last_update,
            "cache": status,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Directory", dir.display());

    match status {
        CacheStatus::Empty => output::note("No cached items"),
        CacheStatus::Unreadable => {
            output::warning("Cached items are unreadable and will be discarded on next load");
        }
        CacheStatus::Present {
            timestamp,
            age_ms,
            expires_in_ms,
            items,
            fresh,
        } => {
            output::field("Items", items);
            output::field("Written", format_timestamp(timestamp));
            output::field("Age", format_remaining(millis(age_ms)));
            if fresh {
                output::field("Expires in", format_remaining(millis(expires_in_ms)));
                output::success("Cache is fresh");
            } else {
                output::warning("Cache has expired");
                output::hint("run `wynnxp fetch` to refresh it");
            }
        }
    }

    if let Some(last) = last_update {
        output::field("Last update", format_timestamp(last));
    }
    Ok(())
}

/// Execute `cache clear`.
pub fn execute_clear(config: &Config) -> Result<()> {
    bootstrap::build_cache(config).clear()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "cache.clear",
            "status": "ok",
        }));
        return Ok(());
    }

    output::success("Cache cleared");
    Ok(())
}

fn millis(ms: i64) -> std::time::Duration {
    std::time::Duration::from_millis(ms.max(0).unsigned_abs())
}

fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map_or_else(|| millis.to_string(), |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
