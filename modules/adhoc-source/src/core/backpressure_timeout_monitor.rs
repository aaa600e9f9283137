//! Backpressure timeout monitor.
//!
//! The window only runs while the consumer has outstanding demand. Demand only drops to zero
//! when an element is delivered, and every delivery re-arms a full window, so an idle consumer
//! holds a paused full window that starts counting when demand returns.
//!
//! Instants are offsets on the driver's monotonic clock.

#[cfg(test)]
mod tests;

use core::time::Duration;

use super::monitor_verdict::MonitorVerdict;

/// Watches the live upstream instance for delivery stalls.
#[derive(Debug, Clone)]
pub struct BackpressureTimeoutMonitor {
  timeout:  Duration,
  deadline: Option<Duration>,
  paused:   Option<Duration>,
}

impl BackpressureTimeoutMonitor {
  /// Creates a disarmed monitor.
  #[must_use]
  pub const fn new(timeout: Duration) -> Self {
    Self { timeout, deadline: None, paused: None }
  }

  /// Returns the configured window.
  #[must_use]
  pub const fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Returns the running deadline, if the window is currently counting.
  #[must_use]
  pub const fn deadline(&self) -> Option<Duration> {
    self.deadline
  }

  /// Returns `true` while an instance is being watched.
  #[must_use]
  pub const fn is_armed(&self) -> bool {
    self.deadline.is_some() || self.paused.is_some()
  }

  /// Starts a full window for a freshly started instance.
  pub fn arm(&mut self, now: Duration, outstanding: bool) {
    if outstanding {
      self.deadline = Some(now.saturating_add(self.timeout));
      self.paused = None;
    } else {
      self.deadline = None;
      self.paused = Some(self.timeout);
    }
  }

  /// Re-arms a full window after an element was delivered downstream.
  pub fn on_element(&mut self, now: Duration, outstanding: bool) {
    self.arm(now, outstanding);
  }

  /// Resumes a paused window when demand returns. A running window is left untouched.
  pub fn on_demand_resumed(&mut self, now: Duration) {
    if let Some(remaining) = self.paused.take() {
      self.deadline = Some(now.saturating_add(remaining));
    }
  }

  /// Stops watching.
  pub const fn disarm(&mut self) {
    self.deadline = None;
    self.paused = None;
  }

  /// Evaluates the window at `now`.
  #[must_use]
  pub fn poll(&self, now: Duration) -> MonitorVerdict {
    match (self.deadline, self.paused) {
      | (Some(deadline), _) if now >= deadline => MonitorVerdict::TimedOut,
      | (Some(deadline), _) => MonitorVerdict::Pending { deadline },
      | (None, Some(remaining)) => MonitorVerdict::Paused { remaining },
      | (None, None) => MonitorVerdict::Disarmed,
    }
  }
}
