//! Subscription handle.

use tokio::{sync::mpsc, task::JoinHandle};

use super::adhoc_command::AdhocCommand;
use crate::core::{AdhocRunId, AdhocSourceError, AdhocSourceSnapshot, AdhocSourceSnapshotShared};

/// Handle of one subscription run. Dropping it cancels the run.
#[derive(Debug)]
pub struct AdhocSubscription {
  run_id:   AdhocRunId,
  commands: mpsc::UnboundedSender<AdhocCommand>,
  snapshot: AdhocSourceSnapshotShared,
  task:     JoinHandle<()>,
}

impl AdhocSubscription {
  pub(crate) const fn new(
    run_id: AdhocRunId,
    commands: mpsc::UnboundedSender<AdhocCommand>,
    snapshot: AdhocSourceSnapshotShared,
    task: JoinHandle<()>,
  ) -> Self {
    Self { run_id, commands, snapshot, task }
  }

  /// Returns the identifier of this run.
  #[must_use]
  pub const fn run_id(&self) -> AdhocRunId {
    self.run_id
  }

  /// Requests `amount` further elements. A request of zero fails the run.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::NotRunning`] once the run has terminated.
  pub fn request(&self, amount: u64) -> Result<(), AdhocSourceError> {
    self.commands.send(AdhocCommand::Request(amount)).map_err(|_| AdhocSourceError::NotRunning)
  }

  /// Cancels the run. Cancelling a terminated run is a no-op.
  pub fn cancel(&self) {
    let _ = self.commands.send(AdhocCommand::Cancel);
  }

  /// Returns the latest published snapshot of the run.
  #[must_use]
  pub fn snapshot(&self) -> AdhocSourceSnapshot {
    self.snapshot.load()
  }

  /// Returns `true` once the driver task has exited.
  #[must_use]
  pub fn is_finished(&self) -> bool {
    self.task.is_finished()
  }
}
