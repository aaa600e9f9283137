//! Shared snapshot cell.

use alloc::sync::Arc;

use spin::Mutex;

use super::adhoc_source_snapshot::AdhocSourceSnapshot;

/// Snapshot published by the driver and read by subscription handles.
#[derive(Clone, Debug)]
pub struct AdhocSourceSnapshotShared {
  inner: Arc<Mutex<AdhocSourceSnapshot>>,
}

impl AdhocSourceSnapshotShared {
  /// Creates a cell holding `initial`.
  #[must_use]
  pub fn new(initial: AdhocSourceSnapshot) -> Self {
    Self { inner: Arc::new(Mutex::new(initial)) }
  }

  /// Returns the latest snapshot.
  #[must_use]
  pub fn load(&self) -> AdhocSourceSnapshot {
    *self.inner.lock()
  }

  /// Replaces the snapshot.
  pub fn store(&self, snapshot: AdhocSourceSnapshot) {
    *self.inner.lock() = snapshot;
  }
}
