//! Terminal event kinds of a single upstream instance.


use super::{adhoc_source_error::AdhocSourceError, cancel_reason::CancelReason, upstream_cause::UpstreamCause};

/// How an upstream instance terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationKind {
  /// The instance finished normally.
  Completed,
  /// The instance failed with the given cause.
  Failed(UpstreamCause),
  /// The operator tore the instance down.
  Cancelled(CancelReason),
}

impl TerminationKind {
  /// Returns the error this termination represents, or `None` for a normal completion.
  #[must_use]
  pub fn error(&self) -> Option<AdhocSourceError> {
    match self {
      | Self::Completed => None,
      | Self::Failed(cause) => Some(AdhocSourceError::UpstreamFailure(cause.clone())),
      | Self::Cancelled(_) => Some(AdhocSourceError::Cancelled),
    }
  }
}
