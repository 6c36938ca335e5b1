//! Composition root: wires adapters into application services.

use std::sync::Arc;

use tracing::debug;

use super::config::settings::Config;
use crate::adapter::outbound::api::client::ItemApiClient;
use crate::adapter::outbound::store::file::FileStore;
use crate::application::cache::ItemCache;
use crate::application::orchestrator::{Orchestrator, OrchestratorOptions};
use crate::application::view::listing::Disclosure;
use crate::port::outbound::clock::{Clock, SystemClock};
use crate::port::outbound::presenter::Presenter;
use crate::port::outbound::source::ItemSource;
use crate::port::outbound::store::KeyValueStore;

/// Item cache on the configured store directory.
#[must_use]
pub fn build_cache(config: &Config) -> ItemCache {
    let dir = config.cache.resolved_dir();
    debug!(dir = %dir.display(), "Using file store");
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    ItemCache::new(store, clock)
}

/// Disclosure defaults from `[display]`, widened by CLI flags.
#[must_use]
pub fn disclosure(config: &Config, collapsed: bool, details: bool, only: Vec<String>) -> Disclosure {
    Disclosure {
        collapse_categories: config.display.collapsed || collapsed,
        expand_items: config.display.details || details,
        only,
    }
}

/// Orchestrator talking to the configured API and store.
#[must_use]
pub fn build_orchestrator(
    config: &Config,
    presenter: Arc<dyn Presenter>,
    options: OrchestratorOptions,
) -> Orchestrator {
    let client = ItemApiClient::from_config(&config.api);
    debug!(url = client.url(), "Using item API");
    let source: Arc<dyn ItemSource> = Arc::new(client);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    Orchestrator::new(source, build_cache(config), presenter, clock, options)
}
