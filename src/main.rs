use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use wynnxp::adapter::inbound::cli::command::Cli;
use wynnxp::adapter::inbound::cli::dispatch::dispatch;
use wynnxp::adapter::inbound::cli::output::{self, OutputConfig};
use wynnxp::infrastructure::config::settings::Config;
use wynnxp::infrastructure::paths;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        cli.color.enabled(),
    ));

    let (config_path, explicit) = match &cli.config {
        Some(path) => (path.clone(), true),
        None => (paths::default_config(), false),
    };
    let loaded = if explicit {
        Config::load(&config_path)
    } else {
        Config::load_or_default(&config_path)
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            return ExitCode::FAILURE;
        }
    };

    config.init_logging(output::verbosity());
    debug!(path = %config_path.display(), "Configuration loaded");

    match dispatch(&cli, &config, &config_path).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "Command failed");
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
