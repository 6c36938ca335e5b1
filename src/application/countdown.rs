//! Refresh countdown.
//!
//! A [`CountdownHandle`] owns one background task that reports the time
//! left until a deadline and signals once the deadline passes. Dropping the
//! handle stops the task, so replacing the handle is enough to guarantee a
//! single active countdown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::port::outbound::clock::Clock;
use crate::port::outbound::presenter::Presenter;

/// Sent when a countdown reaches its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshDue {
    pub deadline_ms: i64,
}

pub struct CountdownHandle {
    deadline_ms: i64,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// Spawn a countdown toward `deadline_ms`, ticking every `tick`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        deadline_ms: i64,
        tick: Duration,
        clock: Arc<dyn Clock>,
        presenter: Arc<dyn Presenter>,
        on_elapsed: mpsc::UnboundedSender<RefreshDue>,
    ) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                let remaining = deadline_ms - clock.now_millis();
                if remaining <= 0 {
                    debug!(deadline_ms, "Refresh countdown elapsed");
                    let _ = on_elapsed.send(RefreshDue { deadline_ms });
                    break;
                }
                presenter.countdown(Duration::from_millis(remaining.unsigned_abs()));
            }
        });

        Self { deadline_ms, task }
    }

    #[must_use]
    pub const fn deadline_ms(&self) -> i64 {
        self.deadline_ms
    }

    /// Whether the task has stopped (elapsed or cancelled).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the countdown without signalling.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Split a duration into `d h m s` for display.
#[must_use]
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    format!("{days}d {hours}h {minutes}m {seconds}s")
}
