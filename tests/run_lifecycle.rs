//! Integration tests for the benchmark run lifecycle.
//!
//! These tests drive the controller the way a host update loop does: one `on_tick`
//! per frame followed by `poll`, with time supplied by a manual clock.

use std::{cell::RefCell, rc::Rc, time::Duration};

use framebench::{
    clock::ManualClock, histogram::HistogramBin, BenchmarkConfig, BenchmarkRunController,
    EventQueue, ExitInput, RunEvent, RunMode, RunObserver, RunReport, RunState,
};

/// Flag store that mirrors the "benchmark active" switch.
#[derive(Clone, Default)]
struct FlagStore {
    active: Rc<RefCell<Vec<bool>>>,
}

impl RunObserver for FlagStore {
    fn on_active_changed(&mut self, active: bool) {
        self.active.borrow_mut().push(active);
    }
}

/// Presentation stub counting completed runs.
#[derive(Clone, Default)]
struct ResultsScreen {
    shown: Rc<RefCell<Vec<usize>>>,
    exited: Rc<RefCell<bool>>,
}

impl RunObserver for ResultsScreen {
    fn on_run_complete(&mut self, report: &RunReport) {
        self.shown.borrow_mut().push(report.sample_count());
    }

    fn on_exit(&mut self) {
        *self.exited.borrow_mut() = true;
    }
}

fn frame(controller: &mut BenchmarkRunController<ManualClock>, clock: &ManualClock, ms: f64) {
    clock.advance(Duration::from_millis(ms as u64));
    controller.on_tick(ms);
    controller.poll();
}

#[test]
fn test_timed_run_completes_exactly_once() {
    let clock = ManualClock::new();
    let queue = EventQueue::new();
    let mut controller =
        BenchmarkRunController::with_clock(clock.clone()).with_observer(queue.clone());

    controller.start(RunMode::Timed, Duration::from_millis(1000));
    clock.advance(Duration::from_millis(1000));
    controller.poll();

    assert_eq!(controller.state(), RunState::Stopped);
    assert!(!controller.stop());
    assert!(!controller.poll());
    assert_eq!(queue.completions(), 1);
}

#[test]
fn test_end_to_end_frame_spike() {
    let clock = ManualClock::new();
    let mut controller = BenchmarkRunController::with_clock(clock.clone());

    controller.start(RunMode::Timed, Duration::from_secs(10));
    for ms in [16.0, 17.0, 16.0, 1000.0, 16.0] {
        controller.on_tick(ms);
    }
    controller.stop();

    let report = controller.report().unwrap();
    assert_eq!(report.statistics.fastest, Some(16.0));
    assert_eq!(report.statistics.slowest, Some(1000.0));
    assert_eq!(report.statistics.median, Some(16.0));
    assert_eq!(
        report.histogram.bins,
        vec![
            HistogramBin::new(16.0, 3),
            HistogramBin::new(17.0, 1),
            HistogramBin::new(1000.0, 1),
        ]
    );
}

#[test]
fn test_timed_run_stops_on_wall_clock_not_ticks() {
    let clock = ManualClock::new();
    let mut controller = BenchmarkRunController::with_clock(clock.clone());
    controller.start(RunMode::Timed, Duration::from_millis(100));

    // Slow frames: only a handful of ticks before the deadline.
    frame(&mut controller, &clock, 40.0);
    frame(&mut controller, &clock, 40.0);
    assert!(controller.is_running());
    frame(&mut controller, &clock, 40.0);

    assert_eq!(controller.state(), RunState::Stopped);
    // The tick that crossed the deadline is still part of the run.
    assert_eq!(controller.samples(), &[40.0, 40.0, 40.0]);
}

#[test]
fn test_scripted_run_runs_until_stopped() {
    let clock = ManualClock::new();
    let mut controller = BenchmarkRunController::with_clock(clock.clone());
    controller.start(RunMode::Scripted, Duration::from_millis(100));

    for _ in 0..10_000 {
        frame(&mut controller, &clock, 16.0);
    }

    assert!(controller.is_running());
    assert_eq!(controller.samples().len(), 10_000);

    assert!(controller.stop());
    assert_eq!(controller.report().unwrap().sample_count(), 10_000);
}

#[test]
fn test_empty_run_produces_blank_report() {
    let mut controller = BenchmarkRunController::with_clock(ManualClock::new());
    controller.start(RunMode::Scripted, Duration::ZERO);
    controller.stop();

    let report = controller.report().unwrap();
    assert!(report.statistics.is_empty());
    assert!(report.histogram.is_empty());
}

#[test]
fn test_active_flag_follows_lifecycle() {
    let flags = FlagStore::default();
    let mut controller =
        BenchmarkRunController::with_clock(ManualClock::new()).with_observer(flags.clone());

    controller.start(RunMode::Scripted, Duration::ZERO);
    controller.stop();
    controller.start(RunMode::Scripted, Duration::ZERO);
    controller.request_exit();

    assert_eq!(*flags.active.borrow(), vec![true, false, true, false]);
}

#[test]
fn test_multiple_observers_all_notified() {
    let flags = FlagStore::default();
    let screen = ResultsScreen::default();
    let mut controller = BenchmarkRunController::with_clock(ManualClock::new())
        .with_observer(flags.clone())
        .with_observer(screen.clone());

    controller.start(RunMode::Scripted, Duration::ZERO);
    controller.on_tick(16.0);
    controller.on_tick(16.0);
    controller.stop();
    controller.request_exit();

    assert_eq!(*flags.active.borrow(), vec![true, false]);
    assert_eq!(*screen.shown.borrow(), vec![2]);
    assert!(*screen.exited.borrow());
}

#[test]
fn test_exit_input_during_results() {
    let queue = EventQueue::new();
    let mut controller =
        BenchmarkRunController::with_clock(ManualClock::new()).with_observer(queue.clone());

    controller.start(RunMode::Scripted, Duration::ZERO);
    controller.stop();
    queue.drain();

    assert!(controller.handle_input(ExitInput { cancel: true, ..ExitInput::NONE }));
    assert_eq!(
        queue.drain(),
        vec![
            RunEvent::StateChanged { from: RunState::Stopped, to: RunState::Idle },
            RunEvent::Exit,
        ]
    );
}

#[test]
fn test_auto_stop_racing_manual_stop() {
    let mut controller = BenchmarkRunController::with_clock(ManualClock::new());
    let token = controller
        .start(RunMode::Timed, Duration::from_millis(50))
        .unwrap();

    assert!(controller.stop());
    assert!(!controller.on_auto_stop(token));
    assert_eq!(controller.state(), RunState::Stopped);
}

#[test]
fn test_second_run_starts_clean() {
    let clock = ManualClock::new();
    let config = BenchmarkConfig::default().with_duration(Duration::from_millis(100));
    let mut controller = BenchmarkRunController::with_clock(clock.clone());

    controller.start(config.mode, config.duration());
    frame(&mut controller, &clock, 50.0);
    frame(&mut controller, &clock, 50.0);
    assert_eq!(controller.state(), RunState::Stopped);

    controller.start(config.mode, config.duration());
    assert!(controller.samples().is_empty());
    frame(&mut controller, &clock, 10.0);
    assert_eq!(controller.samples(), &[10.0]);
    assert!(controller.is_running());
}
