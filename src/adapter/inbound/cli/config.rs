//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use super::output;
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::{Config, API_URL_ENV};

/// Execute `config show`.
pub fn execute_show(config: &Config, path: &Path) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "file_found": path.exists(),
            "config": serde_json::to_value(config).map_err(Error::Json)?,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("File", path.display());
    if !path.exists() {
        output::note("(not found, using defaults)");
    }

    output::section("API");
    output::field("URL", &config.api.url);
    if std::env::var_os(API_URL_ENV).is_some() {
        output::note(&format!("URL overridden by {API_URL_ENV}"));
    }
    output::field("Timeout", format!("{}ms", config.api.timeout_ms));
    output::field("Connect", format!("{}ms", config.api.connect_timeout_ms));

    output::section("Cache");
    output::field("Directory", config.cache.resolved_dir().display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Display");
    output::field("Collapsed", config.display.collapsed);
    output::field("Details", config.display.details);
    Ok(())
}
