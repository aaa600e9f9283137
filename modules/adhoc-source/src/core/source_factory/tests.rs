use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

use super::SourceFactory;

#[test]
fn each_call_yields_an_independent_instance() {
  let calls = Arc::new(AtomicUsize::new(0));
  let counter = calls.clone();
  let factory = SourceFactory::new(move || counter.fetch_add(1, Ordering::SeqCst) + 1);
  assert_eq!(factory.create(), 1);
  assert_eq!(factory.create(), 2);
  assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn clones_share_the_same_recipe() {
  let calls = Arc::new(AtomicUsize::new(0));
  let counter = calls.clone();
  let factory = SourceFactory::new(move || counter.fetch_add(1, Ordering::SeqCst) + 1);
  let cloned = factory.clone();
  assert_eq!(factory.create(), 1);
  assert_eq!(cloned.create(), 2);
  assert_eq!(calls.load(Ordering::SeqCst), 2);
}
