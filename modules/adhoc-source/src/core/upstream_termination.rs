//! Termination report for one upstream instance.

use super::termination_kind::TerminationKind;

/// Terminal event of the upstream instance with the given generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTermination {
  generation: u64,
  kind:       TerminationKind,
}

impl UpstreamTermination {
  /// Creates a termination report.
  #[must_use]
  pub const fn new(generation: u64, kind: TerminationKind) -> Self {
    Self { generation, kind }
  }

  /// Returns the 1-based generation of the terminated instance.
  #[must_use]
  pub const fn generation(&self) -> u64 {
    self.generation
  }

  /// Returns how the instance terminated.
  #[must_use]
  pub const fn kind(&self) -> &TerminationKind {
    &self.kind
  }
}
