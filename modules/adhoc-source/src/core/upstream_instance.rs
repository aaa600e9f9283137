//! Live upstream instance owned by the operator.

/// Upstream producer tagged with the generation that created it.
#[derive(Debug)]
pub struct UpstreamInstance<U> {
  generation: u64,
  inner:      U,
}

impl<U> UpstreamInstance<U> {
  /// Wraps a freshly materialized producer.
  #[must_use]
  pub const fn new(generation: u64, inner: U) -> Self {
    Self { generation, inner }
  }

  /// Returns the 1-based generation of this instance.
  #[must_use]
  pub const fn generation(&self) -> u64 {
    self.generation
  }

  /// Returns the producer.
  #[must_use]
  pub const fn inner(&self) -> &U {
    &self.inner
  }

  /// Returns the producer mutably, for polling.
  #[must_use]
  pub const fn inner_mut(&mut self) -> &mut U {
    &mut self.inner
  }
}
