//! Repeatable recipe for upstream instances.

#[cfg(test)]
mod tests;

use alloc::sync::Arc;
use core::fmt::{Debug, Formatter, Result as FmtResult};

/// Shared zero-argument factory producing a fresh upstream instance per call.
pub struct SourceFactory<U> {
  inner: Arc<dyn Fn() -> U + Send + Sync>,
}

impl<U> SourceFactory<U> {
  /// Creates a factory from a closure.
  #[must_use]
  pub fn new<F>(factory: F) -> Self
  where
    F: Fn() -> U + Send + Sync + 'static, {
    Self { inner: Arc::new(factory) }
  }

  /// Produces a new upstream instance.
  #[must_use]
  pub fn create(&self) -> U {
    (self.inner)()
  }
}

impl<U> Clone for SourceFactory<U> {
  fn clone(&self) -> Self {
    Self { inner: Arc::clone(&self.inner) }
  }
}

impl<U> Debug for SourceFactory<U> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("SourceFactory").finish_non_exhaustive()
  }
}
