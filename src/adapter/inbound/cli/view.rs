//! Handlers for `show`, `summary`, `fetch` and `watch`.

use std::sync::Arc;

use tracing::info;

use super::command::ViewArgs;
use super::presenter::{Layout, TerminalPresenter};
use crate::application::orchestrator::{LoadOutcome, OrchestratorOptions};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::presenter::Presenter;

fn options(config: &Config, args: &ViewArgs, live_countdown: bool) -> OrchestratorOptions {
    OrchestratorOptions {
        disclosure: bootstrap::disclosure(
            config,
            args.collapsed,
            args.details,
            args.categories.clone(),
        ),
        live_countdown,
        ..OrchestratorOptions::default()
    }
}

/// Execute `show`: cached items when fresh, otherwise a fetch.
pub async fn execute_show(config: &Config, args: &ViewArgs) -> LoadOutcome {
    let presenter: Arc<dyn Presenter> = Arc::new(TerminalPresenter::new(Layout::Full, false));
    let mut orchestrator =
        bootstrap::build_orchestrator(config, presenter, options(config, args, false));
    orchestrator.load().await
}

/// Execute `summary`.
pub async fn execute_summary(config: &Config) -> LoadOutcome {
    let presenter: Arc<dyn Presenter> =
        Arc::new(TerminalPresenter::new(Layout::SummaryOnly, false));
    let mut orchestrator = bootstrap::build_orchestrator(
        config,
        presenter,
        options(config, &ViewArgs::default(), false),
    );
    orchestrator.load().await
}

/// Execute `fetch`: always hits the API, falling back to the cache.
pub async fn execute_fetch(config: &Config, args: &ViewArgs) -> LoadOutcome {
    let presenter: Arc<dyn Presenter> = Arc::new(TerminalPresenter::new(Layout::Full, false));
    let mut orchestrator =
        bootstrap::build_orchestrator(config, presenter, options(config, args, false));
    orchestrator.refresh().await
}

/// Execute `watch` until Ctrl-C.
pub async fn execute_watch(config: &Config, args: &ViewArgs) -> LoadOutcome {
    let presenter: Arc<dyn Presenter> = Arc::new(TerminalPresenter::new(Layout::Full, true));
    let mut orchestrator =
        bootstrap::build_orchestrator(config, presenter, options(config, args, true));

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    let outcome = orchestrator.run_until(shutdown).await;
    info!("Watch stopped");
    outcome
}
