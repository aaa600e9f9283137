//! Downstream demand bookkeeping.


use super::{adhoc_source_error::AdhocSourceError, demand::Demand};

/// Tracks how many elements the consumer has requested but not yet received.
#[derive(Debug, Clone)]
pub struct DemandTracker {
  current: Demand,
}

impl DemandTracker {
  /// Creates a tracker without outstanding demand.
  #[must_use]
  pub const fn new() -> Self {
    Self { current: Demand::none() }
  }

  /// Returns the current demand value.
  #[must_use]
  pub const fn current(&self) -> Demand {
    self.current
  }

  /// Returns `true` while the consumer is waiting for at least one element.
  #[must_use]
  pub const fn has_outstanding(&self) -> bool {
    self.current.is_outstanding()
  }

  /// Adds demand to the tracker. Overflowing requests saturate to [`Demand::Unbounded`].
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::InvalidDemand`] when `amount` is zero.
  pub const fn request(&mut self, amount: u64) -> Result<Demand, AdhocSourceError> {
    if amount == 0 {
      return Err(AdhocSourceError::InvalidDemand);
    }

    self.current = match self.current {
      | Demand::Unbounded => Demand::Unbounded,
      | Demand::Finite(current) => match current.checked_add(amount) {
        | Some(total) => Demand::Finite(total),
        | None => Demand::Unbounded,
      },
    };
    Ok(self.current)
  }

  /// Consumes a single unit of demand when available.
  #[must_use]
  pub const fn consume_one(&mut self) -> bool {
    match self.current {
      | Demand::Unbounded => true,
      | Demand::Finite(value) if value > 0 => {
        self.current = Demand::Finite(value - 1);
        true
      },
      | Demand::Finite(_) => false,
    }
  }

  /// Drops any outstanding demand.
  pub const fn clear(&mut self) {
    self.current = Demand::none();
  }
}

impl Default for DemandTracker {
  fn default() -> Self {
    Self::new()
  }
}
