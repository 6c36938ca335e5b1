//! Routes parsed commands to their handlers.

use std::path::Path;

use super::command::{CacheCommand, Cli, Commands, ConfigCommand};
use super::{cache, config, view};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run the selected command.
///
/// Returns whether the command succeeded from the user's point of view:
/// for item commands, whether any items were presented.
pub async fn dispatch(cli: &Cli, settings: &Config, config_path: &Path) -> Result<bool> {
    match &cli.command {
        Commands::Show(args) => Ok(view::execute_show(settings, args).await.presented()),
        Commands::Summary => Ok(view::execute_summary(settings).await.presented()),
        Commands::Fetch(args) => Ok(view::execute_fetch(settings, args).await.presented()),
        Commands::Watch(args) => Ok(view::execute_watch(settings, args).await.presented()),
        Commands::Cache(CacheCommand::Status) => cache::execute_status(settings).map(|()| true),
        Commands::Cache(CacheCommand::Clear) => cache::execute_clear(settings).map(|()| true),
        Commands::Config(ConfigCommand::Show) => {
            config::execute_show(settings, config_path).map(|()| true)
        }
    }
}
