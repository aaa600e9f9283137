//! Reasons for tearing down an upstream instance.

/// Why the operator cancelled an upstream instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
  /// No element arrived within the backpressure window while demand was outstanding.
  BackpressureTimeout,
  /// The consumer cancelled its subscription.
  DownstreamCancelled,
  /// The consumer issued an invalid demand request.
  InvalidDemand,
}
