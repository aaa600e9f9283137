//! Adhoc source configuration.


use core::time::Duration;

use super::{adhoc_source_error::AdhocSourceError, validate_positive_duration::validate_positive_duration};

/// Configuration for one adhoc source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdhocSourceSettings {
  timeout:     Duration,
  max_retries: usize,
}

impl AdhocSourceSettings {
  /// Creates settings with the given backpressure window and restart budget.
  #[must_use]
  pub const fn new(timeout: Duration, max_retries: usize) -> Self {
    Self { timeout, max_retries }
  }

  /// Returns the backpressure window.
  #[must_use]
  pub const fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Returns how many timeout-induced restarts are allowed.
  #[must_use]
  pub const fn max_retries(&self) -> usize {
    self.max_retries
  }

  /// Updates the backpressure window.
  #[must_use]
  pub const fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Updates the restart budget.
  #[must_use]
  pub const fn with_max_retries(mut self, max_retries: usize) -> Self {
    self.max_retries = max_retries;
    self
  }

  /// Checks the settings.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::InvalidArgument`] when the timeout is zero.
  pub fn validate(&self) -> Result<(), AdhocSourceError> {
    validate_positive_duration("timeout", self.timeout)?;
    Ok(())
  }
}
