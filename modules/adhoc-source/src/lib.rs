#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(test), no_std)]

//! Lazily materialized source operator with backpressure timeouts and bounded restarts.
//!
//! The `core` module holds the runtime-agnostic state machine: the demand gate, the
//! backpressure timeout monitor, the restart policy and the termination watcher contract.
//! The `std` module drives that machine on tokio and exposes the subscriber-facing API.

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod std;
