//! Adhoc source state machine.

#[cfg(test)]
mod tests;

use alloc::{vec, vec::Vec};
use core::{marker::PhantomData, time::Duration};

use super::{
  adhoc_directive::AdhocDirective, adhoc_source_error::AdhocSourceError, adhoc_source_settings::AdhocSourceSettings,
  adhoc_source_snapshot::AdhocSourceSnapshot, adhoc_source_state::AdhocSourceState,
  backpressure_timeout_monitor::BackpressureTimeoutMonitor, cancel_reason::CancelReason, demand::Demand,
  demand_gate::DemandGate, demand_tracker::DemandTracker, monitor_verdict::MonitorVerdict,
  restart_decision::RestartDecision, restart_policy::RestartPolicy, source_factory::SourceFactory,
  termination_kind::TerminationKind, upstream_cause::UpstreamCause, upstream_instance::UpstreamInstance,
  upstream_termination::UpstreamTermination,
};

/// Single decision point for one adhoc source run.
///
/// Every event (demand, element, upstream termination, clock tick, cancellation) goes through
/// exactly one method, and each method returns the directives the driver has to carry out.
/// The live upstream instance is owned here. It is dropped inside the transition that retires
/// it, before a replacement is materialized, so elements of a retired generation cannot reach
/// the consumer.
///
/// `now` is the elapsed time on the driver's monotonic clock.
pub struct AdhocSourceLogic<T, U> {
  settings: AdhocSourceSettings,
  gate:     DemandGate<U>,
  monitor:  BackpressureTimeoutMonitor,
  policy:   RestartPolicy,
  demand:   DemandTracker,
  live:     Option<UpstreamInstance<U>>,
  _element: PhantomData<fn() -> T>,
}

impl<T, U> AdhocSourceLogic<T, U> {
  /// Creates an idle run. The factory is not invoked until the first request.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::InvalidArgument`] when the settings are invalid.
  pub fn new(factory: SourceFactory<U>, settings: AdhocSourceSettings) -> Result<Self, AdhocSourceError> {
    settings.validate()?;
    Ok(Self {
      settings,
      gate: DemandGate::new(factory),
      monitor: BackpressureTimeoutMonitor::new(settings.timeout()),
      policy: RestartPolicy::new(settings.max_retries()),
      demand: DemandTracker::new(),
      live: None,
      _element: PhantomData,
    })
  }

  /// Returns the settings of this run.
  #[must_use]
  pub const fn settings(&self) -> AdhocSourceSettings {
    self.settings
  }

  /// Returns the current state.
  #[must_use]
  pub const fn state(&self) -> AdhocSourceState {
    self.policy.state()
  }

  /// Returns the number of instances materialized so far.
  #[must_use]
  pub const fn generation(&self) -> u64 {
    self.gate.generation()
  }

  /// Returns the restarts still allowed.
  #[must_use]
  pub const fn remaining_retries(&self) -> usize {
    self.policy.budget().remaining()
  }

  /// Returns the outstanding downstream demand.
  #[must_use]
  pub const fn demand(&self) -> Demand {
    self.demand.current()
  }

  /// Returns the instant at which the live instance times out, if the window is running.
  #[must_use]
  pub const fn deadline(&self) -> Option<Duration> {
    match self.live {
      | Some(_) => self.monitor.deadline(),
      | None => None,
    }
  }

  /// Returns `true` when the driver may pull the next element from the live instance.
  #[must_use]
  pub const fn should_pull(&self) -> bool {
    self.live.is_some() && self.demand.has_outstanding()
  }

  /// Returns the live instance for polling.
  pub const fn upstream_mut(&mut self) -> Option<&mut UpstreamInstance<U>> {
    self.live.as_mut()
  }

  /// Returns a point-in-time view of this run.
  #[must_use]
  pub const fn snapshot(&self) -> AdhocSourceSnapshot {
    AdhocSourceSnapshot {
      state:             self.state(),
      generation:        self.generation(),
      remaining_retries: self.remaining_retries(),
    }
  }

  /// Adds downstream demand. The first request materializes the first instance.
  ///
  /// A request of zero fails the run with [`AdhocSourceError::InvalidDemand`]. Requests after
  /// termination are ignored.
  pub fn on_request(&mut self, now: Duration, amount: u64) -> Vec<AdhocDirective<T>> {
    if self.state().is_terminal() {
      return Vec::new();
    }
    if let Err(error) = self.demand.request(amount) {
      return self.escalate(CancelReason::InvalidDemand, error);
    }
    if self.gate.is_activated() {
      self.monitor.on_demand_resumed(now);
      return Vec::new();
    }
    match self.activate(now) {
      | Ok(generation) => vec![AdhocDirective::Materialized { generation }],
      | Err(error) => self.escalate(CancelReason::DownstreamCancelled, error),
    }
  }

  /// Accepts an element produced by the instance of `generation`.
  ///
  /// Elements of a retired generation, or elements arriving without outstanding demand, are
  /// discarded. The driver only pulls while [`AdhocSourceLogic::should_pull`] holds.
  pub fn on_element(&mut self, now: Duration, generation: u64, element: T) -> Vec<AdhocDirective<T>> {
    if !self.is_live(generation) || !self.demand.consume_one() {
      return Vec::new();
    }
    self.monitor.on_element(now, self.demand.has_outstanding());
    vec![AdhocDirective::Emit(element)]
  }

  /// Handles normal completion of the instance of `generation`. Never retried.
  pub fn on_upstream_completed(&mut self, generation: u64) -> Vec<AdhocDirective<T>> {
    if !self.is_live(generation) {
      return Vec::new();
    }
    self.retire();
    if let Err(error) = self.policy.on_completed() {
      return self.escalate(CancelReason::DownstreamCancelled, error);
    }
    vec![
      AdhocDirective::Notify(UpstreamTermination::new(generation, TerminationKind::Completed)),
      AdhocDirective::Complete,
    ]
  }

  /// Handles a failure of the instance of `generation`. Propagated as-is, never retried.
  pub fn on_upstream_failed(&mut self, generation: u64, cause: UpstreamCause) -> Vec<AdhocDirective<T>> {
    if !self.is_live(generation) {
      return Vec::new();
    }
    self.retire();
    if let Err(error) = self.policy.on_failed() {
      return self.escalate(CancelReason::DownstreamCancelled, error);
    }
    vec![
      AdhocDirective::Notify(UpstreamTermination::new(generation, TerminationKind::Failed(cause.clone()))),
      AdhocDirective::Fail(AdhocSourceError::UpstreamFailure(cause)),
    ]
  }

  /// Evaluates the backpressure window at `now`, restarting or failing on timeout.
  pub fn on_tick(&mut self, now: Duration) -> Vec<AdhocDirective<T>> {
    if self.live.is_none() || self.state() != AdhocSourceState::Running {
      return Vec::new();
    }
    match self.monitor.poll(now) {
      | MonitorVerdict::TimedOut => self.on_timeout(now),
      | MonitorVerdict::Pending { .. } | MonitorVerdict::Paused { .. } | MonitorVerdict::Disarmed => Vec::new(),
    }
  }

  /// Handles downstream cancellation. Idempotent; no terminal signal is sent downstream.
  pub fn on_cancel(&mut self) -> Vec<AdhocDirective<T>> {
    if self.state().is_terminal() {
      return Vec::new();
    }
    let directives = self.teardown(CancelReason::DownstreamCancelled);
    self.policy.on_cancelled();
    directives
  }

  fn activate(&mut self, now: Duration) -> Result<u64, AdhocSourceError> {
    let instance = self.gate.activate()?;
    self.policy.on_activated()?;
    let generation = instance.generation();
    self.live = Some(instance);
    self.monitor.arm(now, true);
    Ok(generation)
  }

  fn on_timeout(&mut self, now: Duration) -> Vec<AdhocDirective<T>> {
    let mut directives = self.teardown(CancelReason::BackpressureTimeout);
    match self.policy.on_timeout() {
      | Ok(RestartDecision::Restart { .. }) => match self.rematerialize(now) {
        | Ok(generation) => directives.push(AdhocDirective::Materialized { generation }),
        | Err(error) => directives.extend(self.escalate(CancelReason::BackpressureTimeout, error)),
      },
      | Ok(RestartDecision::Exhausted) => {
        self.demand.clear();
        directives.push(AdhocDirective::Fail(AdhocSourceError::BackpressureTimeout { timeout: self.settings.timeout() }));
      },
      | Err(error) => directives.extend(self.escalate(CancelReason::BackpressureTimeout, error)),
    }
    directives
  }

  fn rematerialize(&mut self, now: Duration) -> Result<u64, AdhocSourceError> {
    let instance = self.gate.rematerialize()?;
    self.policy.on_restarted()?;
    let generation = instance.generation();
    self.live = Some(instance);
    self.monitor.arm(now, self.demand.has_outstanding());
    Ok(generation)
  }

  fn is_live(&self, generation: u64) -> bool {
    self.live.as_ref().is_some_and(|instance| instance.generation() == generation)
  }

  fn retire(&mut self) {
    self.live = None;
    self.monitor.disarm();
  }

  // Drops the live instance first; its termination report follows the drop.
  fn teardown(&mut self, reason: CancelReason) -> Vec<AdhocDirective<T>> {
    self.monitor.disarm();
    match self.live.take() {
      | Some(instance) => {
        let generation = instance.generation();
        drop(instance);
        vec![AdhocDirective::Notify(UpstreamTermination::new(generation, TerminationKind::Cancelled(reason)))]
      },
      | None => Vec::new(),
    }
  }

  fn escalate(&mut self, reason: CancelReason, error: AdhocSourceError) -> Vec<AdhocDirective<T>> {
    let mut directives = self.teardown(reason);
    self.demand.clear();
    self.policy.abort();
    directives.push(AdhocDirective::Fail(error));
    directives
  }
}
