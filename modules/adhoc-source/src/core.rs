//! Runtime-agnostic adhoc source state machine.

/// Side effects produced by the state machine.
mod adhoc_directive;
/// Run identifiers.
mod adhoc_run_id;
/// Operator error definitions.
mod adhoc_source_error;
/// State machine combining gate, monitor and restart policy.
mod adhoc_source_logic;
/// Operator configuration.
mod adhoc_source_settings;
/// Point-in-time view of a run.
mod adhoc_source_snapshot;
/// Shared snapshot cell.
mod adhoc_source_snapshot_shared;
/// Operator state enum.
mod adhoc_source_state;
/// Backpressure timeout monitor.
mod backpressure_timeout_monitor;
/// Cancellation reasons.
mod cancel_reason;
/// Demand model types.
mod demand;
/// Deferred first materialization.
mod demand_gate;
/// Demand gate state enum.
mod demand_gate_state;
/// Demand tracking utilities.
mod demand_tracker;
/// Monitor poll outcomes.
mod monitor_verdict;
/// Restart decisions.
mod restart_decision;
/// Restart policy state machine.
mod restart_policy;
/// Restart budget.
mod retry_budget;
/// Upstream instance factory.
mod source_factory;
/// Instance termination kinds.
mod termination_kind;
/// Termination watcher contract.
mod termination_watcher;
/// Upstream failure cause.
mod upstream_cause;
/// Live upstream instance wrapper.
mod upstream_instance;
/// Instance termination report.
mod upstream_termination;
/// Duration argument validation.
mod validate_positive_duration;

pub use adhoc_directive::AdhocDirective;
pub use adhoc_run_id::AdhocRunId;
pub use adhoc_source_error::AdhocSourceError;
pub use adhoc_source_logic::AdhocSourceLogic;
pub use adhoc_source_settings::AdhocSourceSettings;
pub use adhoc_source_snapshot::AdhocSourceSnapshot;
pub use adhoc_source_snapshot_shared::AdhocSourceSnapshotShared;
pub use adhoc_source_state::AdhocSourceState;
pub use backpressure_timeout_monitor::BackpressureTimeoutMonitor;
pub use cancel_reason::CancelReason;
pub use demand::Demand;
pub use demand_gate::DemandGate;
pub use demand_gate_state::DemandGateState;
pub use demand_tracker::DemandTracker;
pub use monitor_verdict::MonitorVerdict;
pub use restart_decision::RestartDecision;
pub use restart_policy::RestartPolicy;
pub use retry_budget::RetryBudget;
pub use source_factory::SourceFactory;
pub use termination_kind::TerminationKind;
pub use termination_watcher::TerminationWatcher;
pub use upstream_cause::UpstreamCause;
pub use upstream_instance::UpstreamInstance;
pub use upstream_termination::UpstreamTermination;
pub use validate_positive_duration::validate_positive_duration;
