//! Downstream consumer contract.

use crate::core::AdhocSourceError;

/// Receives the signals of one subscription.
///
/// `on_next` is called at most as many times as elements were requested. Unless the consumer
/// cancels, exactly one of `on_complete` and `on_error` ends the run.
pub trait AdhocSubscriber<T>: Send + 'static {
  /// Called for each delivered element.
  fn on_next(&mut self, element: T);

  /// Called once when the upstream completed normally.
  fn on_complete(&mut self);

  /// Called once with the terminal error.
  fn on_error(&mut self, error: AdhocSourceError);
}
