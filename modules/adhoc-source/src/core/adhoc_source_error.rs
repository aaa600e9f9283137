//! Adhoc source error definitions.


use core::time::Duration;

use super::upstream_cause::UpstreamCause;

/// Errors produced by the adhoc source operator.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AdhocSourceError {
  /// Demand was outstanding but no element arrived within the window.
  #[error("no element was delivered within {timeout:?} while demand was outstanding")]
  BackpressureTimeout {
    /// Window that elapsed.
    timeout: Duration,
  },
  /// The wrapped upstream failed on its own.
  #[error("upstream failed: {0}")]
  UpstreamFailure(#[source] UpstreamCause),
  /// The upstream instance was torn down by the operator.
  #[error("upstream instance was cancelled")]
  Cancelled,
  /// Demand request is invalid.
  #[error("invalid demand request")]
  InvalidDemand,
  /// A configuration argument is invalid.
  #[error("invalid argument `{name}`: {reason}")]
  InvalidArgument {
    /// Argument name.
    name:   &'static str,
    /// Why the value was rejected.
    reason: &'static str,
  },
  /// The demand gate has already materialized its first instance.
  #[error("demand gate already activated")]
  AlreadyActivated,
  /// The operator is not running.
  #[error("adhoc source is not running")]
  NotRunning,
  /// Required executor is unavailable.
  #[error("executor is unavailable")]
  ExecutorUnavailable,
}

impl AdhocSourceError {
  /// Returns `true` for [`AdhocSourceError::BackpressureTimeout`].
  #[must_use]
  pub const fn is_backpressure_timeout(&self) -> bool {
    matches!(self, Self::BackpressureTimeout { .. })
  }
}
