//! Tokio driver and subscriber API.

/// Commands sent from subscriptions to the driver.
mod adhoc_command;
/// Source blueprint and constructor.
mod adhoc_source;
/// Downstream consumer contract.
mod adhoc_subscriber;
/// Subscription handle.
mod adhoc_subscription;
/// Channel-backed subscriber.
mod channel_subscriber;
/// Downstream signals as values.
mod subscriber_event;
/// Per-run tokio driver.
mod tokio_adhoc_driver;
/// `tracing`-backed termination watcher.
mod tracing_termination_watcher;
/// Boxed upstream stream type.
mod upstream_stream;

pub use adhoc_source::{AdhocSource, adhoc_source};
pub use adhoc_subscriber::AdhocSubscriber;
pub use adhoc_subscription::AdhocSubscription;
pub use channel_subscriber::ChannelSubscriber;
pub use subscriber_event::SubscriberEvent;
pub use tracing_termination_watcher::TracingTerminationWatcher;
pub use upstream_stream::UpstreamStream;
