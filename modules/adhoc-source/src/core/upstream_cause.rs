//! Shared failure cause reported by an upstream instance.


use alloc::{string::ToString, sync::Arc};
use core::{
  error::Error,
  fmt::{Debug, Display, Formatter, Result as FmtResult},
};

/// Failure raised by an upstream instance, kept as-is for the consumer.
///
/// Two causes compare equal when they render the same message.
#[derive(Clone)]
pub struct UpstreamCause {
  inner: Arc<dyn Error + Send + Sync>,
}

impl UpstreamCause {
  /// Wraps an upstream error.
  #[must_use]
  pub fn new<E>(error: E) -> Self
  where
    E: Error + Send + Sync + 'static, {
    Self { inner: Arc::new(error) }
  }

  /// Returns the wrapped error.
  #[must_use]
  pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
    &*self.inner
  }

  /// Attempts to view the wrapped error as a concrete type.
  #[must_use]
  pub fn downcast_ref<E>(&self) -> Option<&E>
  where
    E: Error + 'static, {
    self.inner.downcast_ref::<E>()
  }
}

impl Debug for UpstreamCause {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_tuple("UpstreamCause").field(&self.inner).finish()
  }
}

impl Display for UpstreamCause {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    Display::fmt(&self.inner, f)
  }
}

impl Error for UpstreamCause {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    self.inner.source()
  }
}

impl PartialEq for UpstreamCause {
  fn eq(&self, other: &Self) -> bool {
    self.inner.to_string() == other.inner.to_string()
  }
}

impl Eq for UpstreamCause {}
