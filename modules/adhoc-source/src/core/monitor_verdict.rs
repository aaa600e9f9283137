//! Outcome of polling the backpressure timeout monitor.

use core::time::Duration;

/// Result of [`BackpressureTimeoutMonitor::poll`](super::BackpressureTimeoutMonitor::poll).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorVerdict {
  /// No instance is being watched.
  Disarmed,
  /// Demand is outstanding and the window ends at `deadline`.
  Pending {
    /// Absolute deadline on the driver's clock.
    deadline: Duration,
  },
  /// Demand is absent; the window is frozen with `remaining` left.
  Paused {
    /// Window left once demand returns.
    remaining: Duration,
  },
  /// The window elapsed while demand was outstanding.
  TimedOut,
}
