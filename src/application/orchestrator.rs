//! Fetch orchestration.
//!
//! The [`Orchestrator`] ties the item source, the cache and the presenter
//! together:
//!
//! ```text
//! load ──fresh cache──────────────────────────────► present (Cache)
//!   └──miss──► Fetching ──ok──► write cache ──────► present (Fetched)
//!                  └──err──► read cache ──hit─────► present (Stale)
//!                                  └──miss────────► present_error
//! ```
//!
//! Every present (re)starts the refresh countdown toward
//! `lastUpdate + 24h`. In a watch session the elapsed countdown triggers
//! the next fetch.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{info, warn};

use super::cache::{ItemCache, CACHE_TTL_MS};
use super::countdown::{CountdownHandle, RefreshDue};
use super::view::listing::Disclosure;
use super::view::report::build_report;
use crate::domain::classify::categorize;
use crate::domain::item::ItemMap;
use crate::port::outbound::clock::Clock;
use crate::port::outbound::presenter::Presenter;
use crate::port::outbound::report::DataOrigin;
use crate::port::outbound::source::ItemSource;

/// Fetch lifecycle state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Fetching,
    Success,
    Failed { reason: String },
}

/// Result of a load or refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Fresh cache used; no request made.
    Cached,
    /// Fetched from the source.
    Fetched,
    /// Fetch failed; cached items shown instead.
    Stale { reason: String },
    /// Fetch failed and nothing was cached.
    Unavailable { reason: String },
}

impl LoadOutcome {
    /// Whether any items were presented.
    #[must_use]
    pub const fn presented(&self) -> bool {
        !matches!(self, Self::Unavailable { .. })
    }
}

/// Orchestrator behavior switches.
#[derive(Debug, Clone)]
pub struct OrchestratorOptions {
    pub disclosure: Disclosure,
    /// Keep a ticking countdown task (watch sessions). When false the time
    /// to the next refresh is reported once per present.
    pub live_countdown: bool,
    pub tick: Duration,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            disclosure: Disclosure::default(),
            live_countdown: false,
            tick: Duration::from_secs(1),
        }
    }
}

pub struct Orchestrator {
    source: Arc<dyn ItemSource>,
    cache: ItemCache,
    presenter: Arc<dyn Presenter>,
    clock: Arc<dyn Clock>,
    options: OrchestratorOptions,
    state: FetchState,
    countdown: Option<CountdownHandle>,
    refresh_tx: mpsc::UnboundedSender<RefreshDue>,
    refresh_rx: mpsc::UnboundedReceiver<RefreshDue>,
}

impl Orchestrator {
    #[must_use]
    pub fn new(
        source: Arc<dyn ItemSource>,
        cache: ItemCache,
        presenter: Arc<dyn Presenter>,
        clock: Arc<dyn Clock>,
        options: OrchestratorOptions,
    ) -> Self {
        let (refresh_tx, refresh_rx) = mpsc::unbounded_channel();
        Self {
            source,
            cache,
            presenter,
            clock,
            options,
            state: FetchState::Idle,
            countdown: None,
            refresh_tx,
            refresh_rx,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &FetchState {
        &self.state
    }

    /// Deadline of the active countdown, if one is running.
    #[must_use]
    pub fn countdown_deadline(&self) -> Option<i64> {
        self.countdown
            .as_ref()
            .filter(|c| !c.is_finished())
            .map(CountdownHandle::deadline_ms)
    }

    /// Present fresh cached items, or fetch when the cache is empty/expired.
    pub async fn load(&mut self) -> LoadOutcome {
        if let Some(items) = self.cache.read() {
            info!(items = items.len(), "Using cached items");
            self.present(&items, DataOrigin::Cache);
            return LoadOutcome::Cached;
        }
        self.refresh().await
    }

    /// Fetch from the source regardless of the cache.
    pub async fn refresh(&mut self) -> LoadOutcome {
        self.state = FetchState::Fetching;
        info!(source = self.source.source_name(), "Fetching items");

        match self.source.fetch_items().await {
            Ok(items) => {
                info!(items = items.len(), "Fetched items");
                self.state = FetchState::Success;
                self.persist(&items);
                self.present(&items, DataOrigin::Fetched);
                LoadOutcome::Fetched
            }
            Err(e) => {
                let reason = e.to_string();
                warn!(error = %e, "Failed to fetch items");
                self.state = FetchState::Failed {
                    reason: reason.clone(),
                };

                if let Some(items) = self.cache.read() {
                    info!("Loading from cache after fetch failure");
                    self.present(
                        &items,
                        DataOrigin::Stale {
                            reason: reason.clone(),
                        },
                    );
                    LoadOutcome::Stale { reason }
                } else {
                    self.presenter.present_error(&reason);
                    if self.options.live_countdown {
                        let next = self.clock.now_millis() + CACHE_TTL_MS;
                        self.restart_countdown(next);
                    }
                    LoadOutcome::Unavailable { reason }
                }
            }
        }
    }

    /// Load, then refresh each time the countdown elapses until `shutdown`
    /// completes.
    pub async fn run_until<F>(&mut self, shutdown: F) -> LoadOutcome
    where
        F: Future<Output = ()>,
    {
        let mut last = self.load().await;
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => {
                    info!("Shutdown signal received");
                    break;
                }
                due = self.refresh_rx.recv() => {
                    let Some(due) = due else { break };
                    info!(deadline_ms = due.deadline_ms, "Refresh due");
                    last = self.refresh().await;
                }
            }
        }

        self.countdown = None;
        last
    }

    fn persist(&self, items: &ItemMap) {
        if let Err(e) = self.cache.write(items) {
            warn!(error = %e, "Failed to write item cache");
        }
        if let Err(e) = self.cache.record_update(self.clock.now_millis()) {
            warn!(error = %e, "Failed to record last update time");
        }
    }

    fn present(&mut self, items: &ItemMap, origin: DataOrigin) {
        let classification = categorize(items);
        let report = build_report(&classification, &self.options.disclosure, origin);
        self.presenter.present(&report);
        let deadline = self.next_refresh_at();
        self.restart_countdown(deadline);
    }

    /// `lastUpdate + 24h`, or `now + 24h` when that is unknown or past.
    fn next_refresh_at(&self) -> i64 {
        let now = self.clock.now_millis();
        self.cache
            .last_update()
            .map(|last| last + CACHE_TTL_MS)
            .filter(|deadline| *deadline > now)
            .unwrap_or(now + CACHE_TTL_MS)
    }

    fn restart_countdown(&mut self, deadline_ms: i64) {
        // Stop the previous countdown before starting its replacement.
        self.countdown = None;

        if self.options.live_countdown {
            self.countdown = Some(CountdownHandle::start(
                deadline_ms,
                self.options.tick,
                Arc::clone(&self.clock),
                Arc::clone(&self.presenter),
                self.refresh_tx.clone(),
            ));
        } else {
            let remaining = (deadline_ms - self.clock.now_millis()).max(0);
            self.presenter
                .countdown(Duration::from_millis(remaining.unsigned_abs()));
        }
    }
}
