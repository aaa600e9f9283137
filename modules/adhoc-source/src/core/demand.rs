//! Demand model.

/// Outstanding downstream demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demand {
  /// Finite demand with the number of elements still owed to the consumer.
  Finite(u64),
  /// Unbounded demand.
  Unbounded,
}

impl Demand {
  /// Returns the empty demand.
  #[must_use]
  pub const fn none() -> Self {
    Self::Finite(0)
  }

  /// Returns `true` if the demand is unbounded.
  #[must_use]
  pub const fn is_unbounded(&self) -> bool {
    matches!(self, Self::Unbounded)
  }

  /// Returns `true` while at least one element is owed downstream.
  #[must_use]
  pub const fn is_outstanding(&self) -> bool {
    match self {
      | Self::Unbounded => true,
      | Self::Finite(remaining) => *remaining > 0,
    }
  }

  /// Returns the remaining finite demand, if any.
  #[must_use]
  pub const fn remaining(&self) -> Option<u64> {
    match self {
      | Self::Finite(value) => Some(*value),
      | Self::Unbounded => None,
    }
  }
}
