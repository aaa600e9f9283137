//! Adhoc source run identifier.


use core::{
  fmt::{Display, Formatter, Result as FmtResult},
  sync::atomic::Ordering,
};

use portable_atomic::AtomicU64;

/// Unique identifier of one subscription run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdhocRunId(u64);

impl AdhocRunId {
  /// Returns the raw identifier value.
  #[must_use]
  pub const fn value(self) -> u64 {
    self.0
  }

  /// Generates a monotonically increasing run identifier.
  #[must_use]
  pub fn next() -> Self {
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
  }
}

impl Display for AdhocRunId {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    write!(f, "adhoc-{}", self.0)
  }
}
