//! Demand gate state.

/// Whether the gate has materialized its first upstream instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandGateState {
  /// No demand seen yet; the factory has not been invoked.
  Idle,
  /// The first instance exists; demand flows to the live instance.
  Running,
}
