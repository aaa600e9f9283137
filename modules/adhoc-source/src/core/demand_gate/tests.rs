use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

use super::DemandGate;
use crate::core::{AdhocSourceError, DemandGateState, SourceFactory};

fn counting_gate() -> (DemandGate<usize>, Arc<AtomicUsize>) {
  let calls = Arc::new(AtomicUsize::new(0));
  let counter = calls.clone();
  let factory = SourceFactory::new(move || counter.fetch_add(1, Ordering::SeqCst));
  (DemandGate::new(factory), calls)
}

#[test]
fn idle_gate_never_invokes_factory() {
  let (gate, calls) = counting_gate();
  assert_eq!(gate.state(), DemandGateState::Idle);
  assert_eq!(gate.generation(), 0);
  assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn activate_invokes_factory_exactly_once() {
  let (mut gate, calls) = counting_gate();
  let instance = gate.activate().expect("activate");
  assert_eq!(instance.generation(), 1);
  assert_eq!(gate.state(), DemandGateState::Running);
  assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn second_activation_is_rejected() {
  let (mut gate, calls) = counting_gate();
  gate.activate().expect("activate");
  assert!(matches!(gate.activate(), Err(AdhocSourceError::AlreadyActivated)));
  assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn rematerialize_requires_activation() {
  let (mut gate, calls) = counting_gate();
  assert!(matches!(gate.rematerialize(), Err(AdhocSourceError::NotRunning)));
  assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn rematerialize_bumps_generation() {
  let (mut gate, calls) = counting_gate();
  gate.activate().expect("activate");
  let second = gate.rematerialize().expect("rematerialize");
  assert_eq!(second.generation(), 2);
  assert_eq!(*second.inner(), 1);
  assert_eq!(calls.load(Ordering::SeqCst), 2);
}
