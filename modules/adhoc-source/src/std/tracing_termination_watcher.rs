//! `tracing`-backed termination watcher.


use tracing::{debug, info, warn};

use crate::core::{CancelReason, TerminationKind, TerminationWatcher, UpstreamTermination};

const TARGET: &str = "fraktor::streams::adhoc_source::watcher";

/// Termination watcher that reports every instance termination through `tracing`.
///
/// Completions and downstream cancellations are logged at `DEBUG`, timeout-induced
/// cancellations at `INFO` and upstream failures at `WARN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTerminationWatcher;

impl TracingTerminationWatcher {
  /// Target name used in emitted events.
  pub const DEFAULT_TARGET: &'static str = TARGET;

  /// Creates the watcher.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl TerminationWatcher for TracingTerminationWatcher {
  fn on_terminated(&self, termination: &UpstreamTermination) {
    let generation = termination.generation();
    match termination.kind() {
      | TerminationKind::Completed => {
        debug!(target: TARGET, generation, "upstream instance completed");
      },
      | TerminationKind::Failed(cause) => {
        warn!(target: TARGET, generation, %cause, "upstream instance failed");
      },
      | TerminationKind::Cancelled(CancelReason::BackpressureTimeout) => {
        info!(target: TARGET, generation, "upstream instance cancelled after backpressure timeout");
      },
      | TerminationKind::Cancelled(reason) => {
        debug!(target: TARGET, generation, ?reason, "upstream instance cancelled");
      },
    }
  }
}
