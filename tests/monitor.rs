use std::cell::Cell;
use std::rc::Rc;

use egui::Color32;
use perfmon::{MonitorOptions, PerformanceMonitor};

fn counting_monitor(options: MonitorOptions) -> (PerformanceMonitor, Rc<Cell<u32>>) {
    let polls = Rc::new(Cell::new(0));
    let polls_in_fn = Rc::clone(&polls);
    let monitor = PerformanceMonitor::new(
        options,
        Box::new(move || {
            polls_in_fn.set(polls_in_fn.get() + 1);
            7.5
        }),
    );
    (monitor, polls)
}

#[test]
fn start_polls_once_immediately() {
    let (mut monitor, polls) = counting_monitor(MonitorOptions::new("cpu"));
    assert!(!monitor.is_running());
    assert!(monitor.latest_value().is_none());

    monitor.start();
    assert!(monitor.is_running());
    assert_eq!(polls.get(), 1);
    assert_eq!(monitor.latest_value(), Some(7.5));
}

#[test]
fn double_start_does_not_double_poll() {
    let (mut monitor, polls) = counting_monitor(MonitorOptions::new("cpu"));
    monitor.start();
    monitor.start();
    assert_eq!(polls.get(), 1);
    assert!(monitor.is_running());
}

#[test]
fn stop_twice_is_harmless() {
    let (mut monitor, _) = counting_monitor(MonitorOptions::new("cpu"));
    monitor.start();
    monitor.stop();
    assert!(!monitor.is_running());
    monitor.stop();
    assert!(!monitor.is_running());

    // a stopped monitor can be restarted, with a fresh immediate poll
    monitor.start();
    assert!(monitor.is_running());
}

#[test]
fn stop_before_start_is_a_no_op() {
    let (mut monitor, polls) = counting_monitor(MonitorOptions::new("cpu"));
    monitor.stop();
    assert!(!monitor.is_running());
    assert_eq!(polls.get(), 0);
}

#[test]
fn option_updates_are_applied() {
    let (mut monitor, _) = counting_monitor(
        MonitorOptions::new("fps").with_unit("fps").with_max(60.0),
    );
    assert_eq!(monitor.options().max, 60.0);

    let updated = MonitorOptions::new("fps")
        .with_unit("fps")
        .with_color(Color32::RED)
        .with_smooth(false);
    monitor.set_options(updated.clone());
    assert_eq!(*monitor.options(), updated);
    assert_eq!(monitor.options().max, 0.0);
}

#[test]
fn data_source_can_be_swapped() {
    let (mut monitor, polls) = counting_monitor(MonitorOptions::new("mem"));
    monitor.start();
    assert_eq!(polls.get(), 1);

    monitor.set_data_source(Box::new(|| 99.0));
    // the swapped source takes effect on the next tick; restarting gives
    // one immediately
    monitor.stop();
    monitor.start();
    assert_eq!(monitor.latest_value(), Some(99.0));
    assert_eq!(polls.get(), 1);
}

#[test]
fn options_defaults_match_the_documented_contract() {
    let options = MonitorOptions::default();
    assert!(options.smooth);
    assert_eq!(options.unit, "");
    assert_eq!(options.color, Color32::from_rgb(0x1a, 0x73, 0xe8));
    assert_eq!(options.max, 0.0);
}
