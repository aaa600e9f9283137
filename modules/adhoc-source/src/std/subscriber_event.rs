use crate::core::AdhocSourceError;

/// Downstream signal captured as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriberEvent<T> {
  /// An element.
  Next(T),
  /// Normal completion.
  Complete,
  /// Terminal error.
  Error(AdhocSourceError),
}
