use alloc::{sync::Arc, vec, vec::Vec};
use core::{
  fmt::{Display, Formatter, Result as FmtResult},
  sync::atomic::{AtomicUsize, Ordering},
  time::Duration,
};

use super::AdhocSourceLogic;
use crate::core::{
  AdhocDirective, AdhocSourceError, AdhocSourceSettings, AdhocSourceState, CancelReason, SourceFactory,
  TerminationKind, UpstreamCause, UpstreamTermination,
};

#[derive(Debug)]
struct ReplayRejected;

impl Display for ReplayRejected {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str("replay rejected")
  }
}

impl core::error::Error for ReplayRejected {}

const TIMEOUT: Duration = Duration::from_millis(200);

const fn ms(value: u64) -> Duration {
  Duration::from_millis(value)
}

fn logic(max_retries: usize) -> (AdhocSourceLogic<u32, usize>, Arc<AtomicUsize>) {
  let calls = Arc::new(AtomicUsize::new(0));
  let counter = calls.clone();
  let factory = SourceFactory::new(move || counter.fetch_add(1, Ordering::SeqCst) + 1);
  let logic = AdhocSourceLogic::new(factory, AdhocSourceSettings::new(TIMEOUT, max_retries)).expect("logic");
  (logic, calls)
}

fn timed_out(generation: u64) -> AdhocDirective<u32> {
  AdhocDirective::Notify(UpstreamTermination::new(
    generation,
    TerminationKind::Cancelled(CancelReason::BackpressureTimeout),
  ))
}

#[test]
fn rejects_zero_timeout() {
  let factory = SourceFactory::new(|| 0_usize);
  let result = AdhocSourceLogic::<u32, usize>::new(factory, AdhocSourceSettings::new(Duration::ZERO, 1));
  assert!(matches!(result, Err(AdhocSourceError::InvalidArgument { name: "timeout", .. })));
}

#[test]
fn factory_is_not_invoked_without_demand() {
  let (mut logic, calls) = logic(3);
  assert!(logic.on_tick(ms(10_000)).is_empty());
  assert_eq!(logic.state(), AdhocSourceState::Idle);
  assert_eq!(logic.deadline(), None);
  assert!(!logic.should_pull());
  assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn first_request_materializes_exactly_once() {
  let (mut logic, calls) = logic(3);
  assert_eq!(logic.on_request(ms(0), 1), vec![AdhocDirective::Materialized { generation: 1 }]);
  assert!(logic.on_request(ms(10), 1).is_empty());
  assert_eq!(calls.load(Ordering::SeqCst), 1);
  assert_eq!(logic.state(), AdhocSourceState::Running);
  assert_eq!(logic.upstream_mut().map(|instance| *instance.inner()), Some(1));
  assert!(logic.should_pull());
}

#[test]
fn elements_are_emitted_against_demand() {
  let (mut logic, _calls) = logic(3);
  logic.on_request(ms(0), 1);
  assert_eq!(logic.on_element(ms(5), 1, 42), vec![AdhocDirective::Emit(42)]);
  assert!(!logic.should_pull());
  assert!(logic.on_element(ms(6), 1, 43).is_empty());
}

#[test]
fn exhausts_after_max_retries_plus_one_timeouts() {
  for max_retries in 0..4_usize {
    let (mut logic, calls) = logic(max_retries);
    logic.on_request(ms(0), 1);
    let mut now = ms(0);
    for generation in 1..=max_retries as u64 {
      now += TIMEOUT;
      assert_eq!(logic.on_tick(now), vec![timed_out(generation), AdhocDirective::Materialized {
        generation: generation + 1,
      }]);
    }
    now += TIMEOUT;
    let last = max_retries as u64 + 1;
    assert_eq!(logic.on_tick(now), vec![
      timed_out(last),
      AdhocDirective::Fail(AdhocSourceError::BackpressureTimeout { timeout: TIMEOUT }),
    ]);
    assert_eq!(logic.state(), AdhocSourceState::Exhausted);
    assert_eq!(calls.load(Ordering::SeqCst), max_retries + 1);
    assert!(logic.on_tick(now + TIMEOUT).is_empty());
    assert!(logic.on_request(now + TIMEOUT, 1).is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), max_retries + 1);
  }
}

#[test]
fn tick_before_deadline_keeps_instance() {
  let (mut logic, _calls) = logic(1);
  logic.on_request(ms(0), 1);
  assert!(logic.on_tick(ms(199)).is_empty());
  assert_eq!(logic.deadline(), Some(ms(200)));
}

#[test]
fn restart_resets_a_full_window_from_the_new_start() {
  let (mut logic, _calls) = logic(1);
  logic.on_request(ms(0), 1);
  logic.on_tick(ms(230));
  assert_eq!(logic.deadline(), Some(ms(430)));
}

#[test]
fn idle_consumer_does_not_trigger_restart() {
  let (mut logic, calls) = logic(3);
  logic.on_request(ms(0), 1);
  assert_eq!(logic.on_element(ms(10), 1, 1), vec![AdhocDirective::Emit(1)]);
  assert!(logic.on_tick(ms(310)).is_empty());
  assert!(logic.on_request(ms(310), 1).is_empty());
  assert_eq!(logic.on_element(ms(320), 1, 2), vec![AdhocDirective::Emit(2)]);
  assert_eq!(logic.generation(), 1);
  assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn element_delivered_at_the_deadline_suppresses_the_timeout() {
  let (mut logic, _calls) = logic(0);
  logic.on_request(ms(0), 2);
  assert_eq!(logic.on_element(ms(200), 1, 7), vec![AdhocDirective::Emit(7)]);
  assert!(logic.on_tick(ms(200)).is_empty());
  assert_eq!(logic.state(), AdhocSourceState::Running);
}

#[test]
fn elements_of_a_retired_generation_are_discarded() {
  let (mut logic, _calls) = logic(1);
  logic.on_request(ms(0), 1);
  logic.on_tick(ms(200));
  assert!(logic.on_element(ms(201), 1, 99).is_empty());
  assert!(logic.on_upstream_completed(1).is_empty());
  assert_eq!(logic.on_element(ms(202), 2, 100), vec![AdhocDirective::Emit(100)]);
}

#[test]
fn completion_is_never_retried() {
  let (mut logic, calls) = logic(5);
  logic.on_request(ms(0), 1);
  assert_eq!(logic.on_upstream_completed(1), vec![
    AdhocDirective::Notify(UpstreamTermination::new(1, TerminationKind::Completed)),
    AdhocDirective::Complete,
  ]);
  assert_eq!(logic.state(), AdhocSourceState::Completed);
  assert!(logic.on_tick(ms(10_000)).is_empty());
  assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn upstream_failure_is_propagated_as_is() {
  let (mut logic, calls) = logic(5);
  logic.on_request(ms(0), 1);
  let cause = UpstreamCause::new(ReplayRejected);
  assert_eq!(logic.on_upstream_failed(1, cause.clone()), vec![
    AdhocDirective::Notify(UpstreamTermination::new(1, TerminationKind::Failed(cause.clone()))),
    AdhocDirective::Fail(AdhocSourceError::UpstreamFailure(cause)),
  ]);
  assert_eq!(logic.state(), AdhocSourceState::Failed);
  assert_eq!(logic.remaining_retries(), 5);
  assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn zero_request_fails_the_run() {
  let (mut logic, _calls) = logic(1);
  logic.on_request(ms(0), 1);
  assert_eq!(logic.on_request(ms(1), 0), vec![
    AdhocDirective::Notify(UpstreamTermination::new(1, TerminationKind::Cancelled(CancelReason::InvalidDemand))),
    AdhocDirective::Fail(AdhocSourceError::InvalidDemand),
  ]);
  assert_eq!(logic.state(), AdhocSourceState::Failed);
}

#[test]
fn zero_request_before_activation_never_materializes() {
  let (mut logic, calls) = logic(1);
  assert_eq!(logic.on_request(ms(0), 0), vec![AdhocDirective::Fail(AdhocSourceError::InvalidDemand)]);
  assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn cancel_tears_down_once() {
  let (mut logic, _calls) = logic(1);
  logic.on_request(ms(0), 1);
  assert_eq!(logic.on_cancel(), vec![AdhocDirective::Notify(UpstreamTermination::new(
    1,
    TerminationKind::Cancelled(CancelReason::DownstreamCancelled),
  ))]);
  assert_eq!(logic.state(), AdhocSourceState::Cancelled);
  assert!(logic.on_cancel().is_empty());
  assert!(logic.upstream_mut().is_none());
}

#[test]
fn cancel_before_demand_has_nothing_to_tear_down() {
  let (mut logic, calls) = logic(1);
  let directives: Vec<AdhocDirective<u32>> = logic.on_cancel();
  assert!(directives.is_empty());
  assert_eq!(logic.state(), AdhocSourceState::Cancelled);
  assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn snapshot_tracks_progress() {
  let (mut logic, _calls) = logic(2);
  logic.on_request(ms(0), 1);
  logic.on_tick(ms(200));
  let snapshot = logic.snapshot();
  assert_eq!(snapshot.state, AdhocSourceState::Running);
  assert_eq!(snapshot.generation, 2);
  assert_eq!(snapshot.remaining_retries, 1);
}
