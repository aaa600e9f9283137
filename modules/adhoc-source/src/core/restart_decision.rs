//! Outcome of a timeout signal.

/// What the restart policy decided for a timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartDecision {
  /// Replace the instance; `remaining_retries` is the budget left after this restart.
  Restart {
    /// Retries left after this restart.
    remaining_retries: usize,
  },
  /// Fail downstream with a backpressure timeout.
  Exhausted,
}
