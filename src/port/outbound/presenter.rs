//! Display surface port.

use std::time::Duration;

use crate::port::outbound::report::Report;

/// Where rendered views end up (a terminal, a test recorder).
///
/// Implementations must not fail: anything they cannot show is dropped.
pub trait Presenter: Send + Sync {
    /// Show a listing and its summary, replacing whatever was shown before.
    fn present(&self, report: &Report);

    /// Show an inline error in place of the listing.
    fn present_error(&self, message: &str);

    /// Show the time left until the next automatic refresh.
    fn countdown(&self, remaining: Duration);
}
