//! Restart policy state machine.


use super::{
  adhoc_source_error::AdhocSourceError, adhoc_source_state::AdhocSourceState, restart_decision::RestartDecision,
  retry_budget::RetryBudget,
};

/// Decides between restarting and failing when the live instance times out.
///
/// Only backpressure timeouts consume the budget. Completion and upstream failures are
/// terminal regardless of how many retries remain.
#[derive(Debug, Clone)]
pub struct RestartPolicy {
  state:  AdhocSourceState,
  budget: RetryBudget,
}

impl RestartPolicy {
  /// Creates an idle policy with a full budget.
  #[must_use]
  pub const fn new(max_retries: usize) -> Self {
    Self { state: AdhocSourceState::Idle, budget: RetryBudget::new(max_retries) }
  }

  /// Returns the current state.
  #[must_use]
  pub const fn state(&self) -> AdhocSourceState {
    self.state
  }

  /// Returns the retry budget.
  #[must_use]
  pub const fn budget(&self) -> RetryBudget {
    self.budget
  }

  /// `Idle -> Running` once the first instance was materialized.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::AlreadyActivated`] when not idle.
  pub const fn on_activated(&mut self) -> Result<(), AdhocSourceError> {
    if !matches!(self.state, AdhocSourceState::Idle) {
      return Err(AdhocSourceError::AlreadyActivated);
    }
    self.state = AdhocSourceState::Running;
    Ok(())
  }

  /// Handles a timeout of the live instance.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::NotRunning`] when no instance is running.
  pub const fn on_timeout(&mut self) -> Result<RestartDecision, AdhocSourceError> {
    if !matches!(self.state, AdhocSourceState::Running) {
      return Err(AdhocSourceError::NotRunning);
    }
    if self.budget.try_consume() {
      self.state = AdhocSourceState::TimedOut;
      Ok(RestartDecision::Restart { remaining_retries: self.budget.remaining() })
    } else {
      self.state = AdhocSourceState::Exhausted;
      Ok(RestartDecision::Exhausted)
    }
  }

  /// `TimedOut -> Running` once the replacement instance exists.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::NotRunning`] when no restart is in progress.
  pub const fn on_restarted(&mut self) -> Result<(), AdhocSourceError> {
    if !matches!(self.state, AdhocSourceState::TimedOut) {
      return Err(AdhocSourceError::NotRunning);
    }
    self.state = AdhocSourceState::Running;
    Ok(())
  }

  /// `Running -> Completed`.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::NotRunning`] when no instance is running.
  pub const fn on_completed(&mut self) -> Result<(), AdhocSourceError> {
    self.finish(AdhocSourceState::Completed)
  }

  /// `Running -> Failed`.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::NotRunning`] when no instance is running.
  pub const fn on_failed(&mut self) -> Result<(), AdhocSourceError> {
    self.finish(AdhocSourceState::Failed)
  }

  /// Moves any non-terminal state to `Failed`, for consumer protocol violations.
  pub const fn abort(&mut self) {
    if !self.state.is_terminal() {
      self.state = AdhocSourceState::Failed;
    }
  }

  /// Moves any non-terminal state to `Cancelled`. Idempotent.
  pub const fn on_cancelled(&mut self) {
    if !self.state.is_terminal() {
      self.state = AdhocSourceState::Cancelled;
    }
  }

  const fn finish(&mut self, terminal: AdhocSourceState) -> Result<(), AdhocSourceError> {
    if !matches!(self.state, AdhocSourceState::Running) {
      return Err(AdhocSourceError::NotRunning);
    }
    self.state = terminal;
    Ok(())
  }
}
