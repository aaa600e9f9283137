//! Deferred materialization of upstream instances.

#[cfg(test)]
mod tests;

use super::{
  adhoc_source_error::AdhocSourceError, demand_gate_state::DemandGateState, source_factory::SourceFactory,
  upstream_instance::UpstreamInstance,
};

/// Holds the factory back until the consumer first signals demand.
#[derive(Debug)]
pub struct DemandGate<U> {
  factory:    SourceFactory<U>,
  state:      DemandGateState,
  generation: u64,
}

impl<U> DemandGate<U> {
  /// Creates an idle gate. The factory is not invoked.
  #[must_use]
  pub const fn new(factory: SourceFactory<U>) -> Self {
    Self { factory, state: DemandGateState::Idle, generation: 0 }
  }

  /// Returns the gate state.
  #[must_use]
  pub const fn state(&self) -> DemandGateState {
    self.state
  }

  /// Returns `true` once [`DemandGate::activate`] succeeded.
  #[must_use]
  pub const fn is_activated(&self) -> bool {
    matches!(self.state, DemandGateState::Running)
  }

  /// Returns the number of instances materialized so far.
  #[must_use]
  pub const fn generation(&self) -> u64 {
    self.generation
  }

  /// Materializes the first upstream instance.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::AlreadyActivated`] when called more than once.
  pub fn activate(&mut self) -> Result<UpstreamInstance<U>, AdhocSourceError> {
    if self.is_activated() {
      return Err(AdhocSourceError::AlreadyActivated);
    }
    self.state = DemandGateState::Running;
    Ok(self.materialize())
  }

  /// Materializes a replacement instance after a restart.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::NotRunning`] when the gate was never activated.
  pub fn rematerialize(&mut self) -> Result<UpstreamInstance<U>, AdhocSourceError> {
    if !self.is_activated() {
      return Err(AdhocSourceError::NotRunning);
    }
    Ok(self.materialize())
  }

  fn materialize(&mut self) -> UpstreamInstance<U> {
    self.generation = self.generation.saturating_add(1);
    UpstreamInstance::new(self.generation, self.factory.create())
  }
}
