//! Subscriber forwarding signals into a tokio channel.

use tokio::sync::mpsc;

use super::{adhoc_subscriber::AdhocSubscriber, subscriber_event::SubscriberEvent};
use crate::core::AdhocSourceError;

/// Forwards every signal to an unbounded channel.
///
/// Signals are dropped once the receiving half is gone.
#[derive(Debug)]
pub struct ChannelSubscriber<T> {
  sender: mpsc::UnboundedSender<SubscriberEvent<T>>,
}

impl<T> ChannelSubscriber<T> {
  /// Creates a subscriber and the receiver its signals arrive on.
  #[must_use]
  pub fn channel() -> (Self, mpsc::UnboundedReceiver<SubscriberEvent<T>>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Self { sender }, receiver)
  }
}

impl<T> AdhocSubscriber<T> for ChannelSubscriber<T>
where
  T: Send + 'static,
{
  fn on_next(&mut self, element: T) {
    let _ = self.sender.send(SubscriberEvent::Next(element));
  }

  fn on_complete(&mut self) {
    let _ = self.sender.send(SubscriberEvent::Complete);
  }

  fn on_error(&mut self, error: AdhocSourceError) {
    let _ = self.sender.send(SubscriberEvent::Error(error));
  }
}
