//! Point-in-time view of an adhoc source run.

use super::adhoc_source_state::AdhocSourceState;

/// Observable progress of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdhocSourceSnapshot {
  /// Current state.
  pub state:             AdhocSourceState,
  /// Number of upstream instances materialized so far.
  pub generation:        u64,
  /// Restarts still allowed.
  pub remaining_retries: usize,
}

impl AdhocSourceSnapshot {
  /// Snapshot of a run that has not seen demand yet.
  #[must_use]
  pub const fn idle(max_retries: usize) -> Self {
    Self { state: AdhocSourceState::Idle, generation: 0, remaining_retries: max_retries }
  }
}
