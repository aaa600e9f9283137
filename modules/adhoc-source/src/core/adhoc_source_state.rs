//! Operator state definitions.

/// Execution state of one adhoc source run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdhocSourceState {
  /// No demand seen yet.
  Idle,
  /// An upstream instance is live.
  Running,
  /// A timeout was accepted and a replacement is being materialized.
  TimedOut,
  /// A timeout arrived with no retries left.
  Exhausted,
  /// The upstream completed normally.
  Completed,
  /// The upstream failed or the consumer misbehaved.
  Failed,
  /// The consumer cancelled.
  Cancelled,
}

impl AdhocSourceState {
  /// Returns `true` for states that admit no further transition.
  #[must_use]
  pub const fn is_terminal(self) -> bool {
    matches!(self, Self::Exhausted | Self::Completed | Self::Failed | Self::Cancelled)
  }
}
