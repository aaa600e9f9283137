use core::time::Duration;

use super::BackpressureTimeoutMonitor;
use crate::core::MonitorVerdict;

const fn ms(value: u64) -> Duration {
  Duration::from_millis(value)
}

#[test]
fn new_monitor_is_disarmed() {
  let monitor = BackpressureTimeoutMonitor::new(ms(200));
  assert!(!monitor.is_armed());
  assert_eq!(monitor.poll(ms(10_000)), MonitorVerdict::Disarmed);
}

#[test]
fn times_out_once_window_elapses_with_demand() {
  let mut monitor = BackpressureTimeoutMonitor::new(ms(200));
  monitor.arm(ms(0), true);
  assert_eq!(monitor.poll(ms(199)), MonitorVerdict::Pending { deadline: ms(200) });
  assert_eq!(monitor.poll(ms(200)), MonitorVerdict::TimedOut);
}

#[test]
fn element_rearms_a_full_window() {
  let mut monitor = BackpressureTimeoutMonitor::new(ms(200));
  monitor.arm(ms(0), true);
  monitor.on_element(ms(150), true);
  assert_eq!(monitor.poll(ms(300)), MonitorVerdict::Pending { deadline: ms(350) });
}

#[test]
fn idle_consumer_freezes_the_window() {
  let mut monitor = BackpressureTimeoutMonitor::new(ms(200));
  monitor.arm(ms(0), true);
  monitor.on_element(ms(50), false);
  assert_eq!(monitor.poll(ms(400)), MonitorVerdict::Paused { remaining: ms(200) });
  monitor.on_demand_resumed(ms(400));
  assert_eq!(monitor.deadline(), Some(ms(600)));
}

#[test]
fn further_demand_does_not_extend_a_running_window() {
  let mut monitor = BackpressureTimeoutMonitor::new(ms(200));
  monitor.arm(ms(0), true);
  monitor.on_demand_resumed(ms(120));
  assert_eq!(monitor.poll(ms(199)), MonitorVerdict::Pending { deadline: ms(200) });
  assert_eq!(monitor.poll(ms(200)), MonitorVerdict::TimedOut);
}

#[test]
fn arming_without_demand_starts_paused() {
  let mut monitor = BackpressureTimeoutMonitor::new(ms(200));
  monitor.arm(ms(10), false);
  assert_eq!(monitor.deadline(), None);
  assert_eq!(monitor.poll(ms(500)), MonitorVerdict::Paused { remaining: ms(200) });
}

#[test]
fn disarm_clears_the_window() {
  let mut monitor = BackpressureTimeoutMonitor::new(ms(200));
  monitor.arm(ms(0), true);
  monitor.disarm();
  assert_eq!(monitor.poll(ms(500)), MonitorVerdict::Disarmed);
}
