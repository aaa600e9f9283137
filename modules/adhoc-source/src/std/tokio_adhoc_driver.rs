//! Tokio driver for one adhoc source run.

extern crate std;

use alloc::{sync::Arc, vec::Vec};
use std::panic::{AssertUnwindSafe, catch_unwind};

use futures::StreamExt;
use tokio::{sync::mpsc, time::Instant};
use tracing::{debug, trace, warn};

use super::{adhoc_command::AdhocCommand, adhoc_subscriber::AdhocSubscriber, upstream_stream::UpstreamStream};
use crate::core::{
  AdhocDirective, AdhocRunId, AdhocSourceLogic, AdhocSourceSnapshotShared, CancelReason, TerminationKind,
  TerminationWatcher, UpstreamCause, UpstreamInstance, UpstreamTermination,
};

const TARGET: &str = "fraktor::streams::adhoc_source";

enum DriverEvent<T> {
  Command(Option<AdhocCommand>),
  Upstream { generation: u64, item: Option<Result<T, UpstreamCause>> },
  Deadline,
}

/// Owns one run: its logic, the live upstream, the consumer and the command inbox.
///
/// Commands, upstream elements and the deadline are multiplexed by one biased `select!`, in
/// that order. An element that is ready together with an expiring deadline is delivered first
/// and re-arms the window before the deadline is evaluated.
pub(crate) struct TokioAdhocDriver<T, Sub> {
  run_id:     AdhocRunId,
  logic:      AdhocSourceLogic<T, UpstreamStream<T>>,
  commands:   mpsc::UnboundedReceiver<AdhocCommand>,
  subscriber: Sub,
  watcher:    Option<Arc<dyn TerminationWatcher>>,
  snapshot:   AdhocSourceSnapshotShared,
}

impl<T, Sub> TokioAdhocDriver<T, Sub>
where
  T: Send + 'static,
  Sub: AdhocSubscriber<T>,
{
  pub(crate) const fn new(
    run_id: AdhocRunId,
    logic: AdhocSourceLogic<T, UpstreamStream<T>>,
    commands: mpsc::UnboundedReceiver<AdhocCommand>,
    subscriber: Sub,
    watcher: Option<Arc<dyn TerminationWatcher>>,
    snapshot: AdhocSourceSnapshotShared,
  ) -> Self {
    Self { run_id, logic, commands, subscriber, watcher, snapshot }
  }

  pub(crate) async fn run(mut self) {
    let origin = Instant::now();
    trace!(target: TARGET, run = %self.run_id, "adhoc source run started");
    while !self.logic.state().is_terminal() {
      let event = self.next_event(origin).await;
      let now = origin.elapsed();
      let directives = match event {
        | DriverEvent::Command(Some(AdhocCommand::Request(amount))) => self.logic.on_request(now, amount),
        | DriverEvent::Command(Some(AdhocCommand::Cancel) | None) => self.logic.on_cancel(),
        | DriverEvent::Upstream { generation, item: Some(Ok(element)) } => {
          self.logic.on_element(now, generation, element)
        },
        | DriverEvent::Upstream { generation, item: Some(Err(cause)) } => {
          self.logic.on_upstream_failed(generation, cause)
        },
        | DriverEvent::Upstream { generation, item: None } => self.logic.on_upstream_completed(generation),
        | DriverEvent::Deadline => self.logic.on_tick(now),
      };
      self.apply(directives);
      self.snapshot.store(self.logic.snapshot());
    }
    debug!(target: TARGET, run = %self.run_id, state = ?self.logic.state(), "adhoc source run finished");
  }

  async fn next_event(&mut self, origin: Instant) -> DriverEvent<T> {
    let deadline = self.logic.deadline().map(|offset| origin + offset);
    let pull = self.logic.should_pull();
    let commands = &mut self.commands;
    let upstream = self.logic.upstream_mut();
    tokio::select! {
      biased;
      command = commands.recv() => DriverEvent::Command(command),
      (generation, item) = next_element(upstream), if pull => DriverEvent::Upstream { generation, item },
      () = wait_until(deadline) => DriverEvent::Deadline,
    }
  }

  fn apply(&mut self, directives: Vec<AdhocDirective<T>>) {
    for directive in directives {
      match directive {
        | AdhocDirective::Materialized { generation } => {
          debug!(target: TARGET, run = %self.run_id, generation, "upstream materialized");
        },
        | AdhocDirective::Emit(element) => self.subscriber.on_next(element),
        | AdhocDirective::Complete => {
          debug!(target: TARGET, run = %self.run_id, "upstream completed");
          self.subscriber.on_complete();
        },
        | AdhocDirective::Fail(error) => {
          if error.is_backpressure_timeout() {
            warn!(target: TARGET, run = %self.run_id, generation = self.logic.generation(), "restart budget exhausted");
          } else {
            debug!(target: TARGET, run = %self.run_id, %error, "adhoc source failed");
          }
          self.subscriber.on_error(error);
        },
        | AdhocDirective::Notify(termination) => self.notify(&termination),
      }
    }
  }

  fn notify(&self, termination: &UpstreamTermination) {
    if let TerminationKind::Cancelled(CancelReason::BackpressureTimeout) = termination.kind() {
      debug!(
        target: TARGET,
        run = %self.run_id,
        generation = termination.generation(),
        remaining_retries = self.logic.remaining_retries(),
        "backpressure timeout"
      );
    } else {
      trace!(
        target: TARGET,
        run = %self.run_id,
        generation = termination.generation(),
        kind = ?termination.kind(),
        "upstream terminated"
      );
    }
    let Some(watcher) = &self.watcher else {
      return;
    };
    if catch_unwind(AssertUnwindSafe(|| watcher.on_terminated(termination))).is_err() {
      warn!(target: TARGET, run = %self.run_id, generation = termination.generation(), "termination watcher panicked");
    }
  }
}

async fn next_element<T>(
  upstream: Option<&mut UpstreamInstance<UpstreamStream<T>>>,
) -> (u64, Option<Result<T, UpstreamCause>>) {
  match upstream {
    | Some(instance) => {
      let generation = instance.generation();
      (generation, instance.inner_mut().next().await)
    },
    | None => core::future::pending().await,
  }
}

async fn wait_until(deadline: Option<Instant>) {
  match deadline {
    | Some(at) => tokio::time::sleep_until(at).await,
    | None => core::future::pending().await,
  }
}
