/// Commands a subscription sends to its driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdhocCommand {
  /// Add downstream demand.
  Request(u64),
  /// Cancel the run.
  Cancel,
}
