//! Adhoc source blueprint.


use alloc::sync::Arc;
use core::{error::Error, time::Duration};

use futures::{Stream, StreamExt, TryStreamExt};
use tokio::{runtime::Handle, sync::mpsc};

use super::{
  adhoc_subscriber::AdhocSubscriber, adhoc_subscription::AdhocSubscription, tokio_adhoc_driver::TokioAdhocDriver,
  upstream_stream::UpstreamStream,
};
use crate::core::{
  AdhocRunId, AdhocSourceError, AdhocSourceLogic, AdhocSourceSettings, AdhocSourceSnapshotShared, SourceFactory,
  TerminationWatcher, UpstreamCause,
};

/// Lazily materialized source whose upstream is replaced when it stalls under demand.
///
/// An `AdhocSource` is a blueprint: every [`AdhocSource::subscribe`] starts an independent run
/// with its own demand gate, restart budget and timeout monitor.
pub struct AdhocSource<T> {
  factory:  SourceFactory<UpstreamStream<T>>,
  settings: AdhocSourceSettings,
  watcher:  Option<Arc<dyn TerminationWatcher>>,
}

/// Creates an [`AdhocSource`] with the given backpressure window and restart budget.
///
/// # Errors
///
/// Returns [`AdhocSourceError::InvalidArgument`] when `timeout` is zero.
pub fn adhoc_source<T, F, S, E>(
  factory: F,
  timeout: Duration,
  max_retries: usize,
) -> Result<AdhocSource<T>, AdhocSourceError>
where
  T: Send + 'static,
  F: Fn() -> S + Send + Sync + 'static,
  S: Stream<Item = Result<T, E>> + Send + 'static,
  E: Error + Send + Sync + 'static, {
  AdhocSource::from_settings(factory, AdhocSourceSettings::new(timeout, max_retries))
}

impl<T> AdhocSource<T>
where
  T: Send + 'static,
{
  /// Creates a source from explicit settings.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::InvalidArgument`] when the settings are invalid.
  pub fn from_settings<F, S, E>(factory: F, settings: AdhocSourceSettings) -> Result<Self, AdhocSourceError>
  where
    F: Fn() -> S + Send + Sync + 'static,
    S: Stream<Item = Result<T, E>> + Send + 'static,
    E: Error + Send + Sync + 'static, {
    settings.validate()?;
    let factory = SourceFactory::new(move || factory().map_err(UpstreamCause::new).boxed());
    Ok(Self { factory, settings, watcher: None })
  }

  /// Attaches a watcher notified of every upstream instance termination.
  #[must_use]
  pub fn with_watcher<W>(mut self, watcher: W) -> Self
  where
    W: TerminationWatcher + 'static, {
    self.watcher = Some(Arc::new(watcher));
    self
  }

  /// Returns the settings.
  #[must_use]
  pub const fn settings(&self) -> AdhocSourceSettings {
    self.settings
  }

  /// Subscribes on the tokio runtime of the calling context.
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::ExecutorUnavailable`] outside a tokio runtime.
  pub fn subscribe<Sub>(&self, subscriber: Sub) -> Result<AdhocSubscription, AdhocSourceError>
  where
    Sub: AdhocSubscriber<T>, {
    let runtime = Handle::try_current().map_err(|_| AdhocSourceError::ExecutorUnavailable)?;
    self.subscribe_on(&runtime, subscriber)
  }

  /// Subscribes on an explicit tokio runtime.
  ///
  /// Nothing is materialized until the first [`AdhocSubscription::request`].
  ///
  /// # Errors
  ///
  /// Returns [`AdhocSourceError::InvalidArgument`] when the settings are invalid.
  pub fn subscribe_on<Sub>(&self, runtime: &Handle, subscriber: Sub) -> Result<AdhocSubscription, AdhocSourceError>
  where
    Sub: AdhocSubscriber<T>, {
    let logic = AdhocSourceLogic::new(self.factory.clone(), self.settings)?;
    let run_id = AdhocRunId::next();
    let snapshot = AdhocSourceSnapshotShared::new(logic.snapshot());
    let (commands, inbox) = mpsc::unbounded_channel();
    let driver = TokioAdhocDriver::new(run_id, logic, inbox, subscriber, self.watcher.clone(), snapshot.clone());
    let task = runtime.spawn(driver.run());
    Ok(AdhocSubscription::new(run_id, commands, snapshot, task))
  }
}

impl<T> Clone for AdhocSource<T> {
  fn clone(&self) -> Self {
    Self { factory: self.factory.clone(), settings: self.settings, watcher: self.watcher.clone() }
  }
}
