//! Bounded restart budget.


/// Counts how many timeout-induced restarts are still allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
  max_retries: usize,
  remaining:   usize,
}

impl RetryBudget {
  /// Creates a full budget.
  #[must_use]
  pub const fn new(max_retries: usize) -> Self {
    Self { max_retries, remaining: max_retries }
  }

  /// Returns the configured number of retries.
  #[must_use]
  pub const fn max_retries(&self) -> usize {
    self.max_retries
  }

  /// Returns the retries left.
  #[must_use]
  pub const fn remaining(&self) -> usize {
    self.remaining
  }

  /// Returns how many retries were spent.
  #[must_use]
  pub const fn used(&self) -> usize {
    self.max_retries - self.remaining
  }

  /// Returns `true` when the next timeout is terminal.
  #[must_use]
  pub const fn is_exhausted(&self) -> bool {
    self.remaining == 0
  }

  /// Spends one retry. Returns `false` without changing anything when exhausted.
  pub const fn try_consume(&mut self) -> bool {
    if self.remaining == 0 {
      return false;
    }
    self.remaining -= 1;
    true
  }
}
