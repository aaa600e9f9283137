//! Side effects requested by the adhoc source logic.

use super::{adhoc_source_error::AdhocSourceError, upstream_termination::UpstreamTermination};

/// Instruction for the driver, produced by one state transition.
///
/// Directives are emitted in the order they must be carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdhocDirective<T> {
  /// A new upstream instance was materialized and is now live.
  Materialized {
    /// Generation of the new instance.
    generation: u64,
  },
  /// Deliver an element downstream.
  Emit(T),
  /// Signal normal completion downstream.
  Complete,
  /// Signal a terminal error downstream.
  Fail(AdhocSourceError),
  /// Report an instance termination to the watcher.
  Notify(UpstreamTermination),
}
