//! Observer contract for upstream instance terminations.

use super::upstream_termination::UpstreamTermination;

/// Receives exactly one report per upstream instance.
///
/// Watchers only observe. They are invoked after the operator has already decided how to
/// proceed, and the tokio driver isolates panics raised from this callback.
pub trait TerminationWatcher: Send + Sync {
  /// Called once the instance identified by `termination.generation()` has terminated.
  fn on_terminated(&self, termination: &UpstreamTermination);
}

impl<F> TerminationWatcher for F
where
  F: Fn(&UpstreamTermination) + Send + Sync,
{
  fn on_terminated(&self, termination: &UpstreamTermination) {
    self(termination);
  }
}
