//! Recording presenter for assertions on rendered output.

use std::time::Duration;

use parking_lot::Mutex;

use crate::port::outbound::report::Report;
use crate::port::outbound::presenter::Presenter;

/// One call to [`Presenter::present`] or [`Presenter::present_error`].
#[derive(Debug, Clone, PartialEq)]
pub enum Presented {
    Report(Report),
    Error(String),
}

/// Records every report, error and countdown it receives.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    presented: Mutex<Vec<Presented>>,
    countdowns: Mutex<Vec<Duration>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports and errors, in call order.
    pub fn presented(&self) -> Vec<Presented> {
        self.presented.lock().clone()
    }

    pub fn last(&self) -> Option<Presented> {
        self.presented.lock().last().cloned()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.presented
            .lock()
            .iter()
            .filter_map(|p| match p {
                Presented::Report(report) => Some(report.clone()),
                Presented::Error(_) => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.presented
            .lock()
            .iter()
            .filter_map(|p| match p {
                Presented::Error(message) => Some(message.clone()),
                Presented::Report(_) => None,
            })
            .collect()
    }

    pub fn countdowns(&self) -> Vec<Duration> {
        self.countdowns.lock().clone()
    }
}

impl Presenter for RecordingPresenter {
    fn present(&self, report: &Report) {
        self.presented.lock().push(Presented::Report(report.clone()));
    }

    fn present_error(&self, message: &str) {
        self.presented
            .lock()
            .push(Presented::Error(message.to_string()));
    }

    fn countdown(&self, remaining: Duration) {
        self.countdowns.lock().push(remaining);
    }
}
