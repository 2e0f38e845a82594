//! Benchmark run lifecycle.
//!
//! [`BenchmarkRunController`] owns the run state machine and the sample buffer:
//!
//! ```text
//! Idle ──start──▶ Running ──stop──▶ Stopped ──start──▶ Running ...
//!   ▲                │                 │
//!   └──request_exit──┴─────────────────┘
//! ```
//!
//! Everything runs on the host's update loop. The host forwards each frame's duration
//! to [`on_tick`](BenchmarkRunController::on_tick); samples are only kept while the
//! state is [`RunState::Running`].
//!
//! A [`RunMode::Timed`] run ends after a wall-clock duration. The host can either call
//! [`poll`](BenchmarkRunController::poll) every frame, or schedule the returned
//! [`AutoStopToken`] on its own timer and hand it back through
//! [`on_auto_stop`](BenchmarkRunController::on_auto_stop). A token is only honored for
//! the run that issued it, so a timer that fires after the run was stopped, exited or
//! restarted does nothing. Timers are never cancelled.
//!
//! No operation fails. Transitions that make no sense in the current state, such as a
//! second `stop()`, are ignored.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use framebench::{clock::ManualClock, BenchmarkRunController, RunMode, RunState};
//!
//! let clock = ManualClock::new();
//! let mut controller = BenchmarkRunController::with_clock(clock.clone());
//!
//! controller.start(RunMode::Timed, Duration::from_millis(1000));
//! for frame_time in [16.0, 17.0, 16.0, 1000.0, 16.0] {
//!     controller.on_tick(frame_time);
//! }
//!
//! clock.advance(Duration::from_millis(1000));
//! controller.poll();
//!
//! assert_eq!(controller.state(), RunState::Stopped);
//! let stats = controller.report().unwrap().statistics;
//! assert_eq!(stats.fastest, Some(16.0));
//! assert_eq!(stats.slowest, Some(1000.0));
//! ```

use std::{
    fmt,
    time::{Duration, Instant},
};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    clock::{Clock, SystemClock},
    events::{ExitInput, RunObserver},
    report::RunReport,
    sampler::{Sample, StatSampler},
};

/// Lifecycle state of the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    /// No run has started, or the session was exited.
    #[default]
    Idle,
    /// Samples are being collected.
    Running,
    /// The run ended; its report is available.
    Stopped,
}

/// How a run is ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json-config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json-config", serde(rename_all = "lowercase"))]
pub enum RunMode {
    /// Stops automatically after the configured duration.
    #[default]
    Timed,
    /// Stops only on an explicit [`stop`](BenchmarkRunController::stop).
    Scripted,
}

impl RunMode {
    /// Parses a mode name, ignoring ASCII case.
    pub fn parse(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("timed") {
            Some(RunMode::Timed)
        } else if name.eq_ignore_ascii_case("scripted") {
            Some(RunMode::Scripted)
        } else {
            None
        }
    }
}

/// Handle for a scheduled automatic stop of a timed run.
///
/// Returned by [`BenchmarkRunController::start`] for timed runs. Hand it back to
/// [`BenchmarkRunController::on_auto_stop`] once [`after`](Self::after) has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoStopToken {
    run_id: u64,
    after: Duration,
}

impl AutoStopToken {
    /// Identifier of the run that issued this token.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Delay after which the run should stop.
    pub fn after(&self) -> Duration {
        self.after
    }
}

/// Drives benchmark runs and feeds frame times into the sample buffer.
pub struct BenchmarkRunController<C: Clock = SystemClock> {
    clock: C,
    state: RunState,
    mode: RunMode,
    sampler: StatSampler,
    run_id: u64,
    started_at: Option<Instant>,
    started_wall: Option<DateTime<Utc>>,
    deadline: Option<Instant>,
    exiting: bool,
    report: Option<RunReport>,
    observers: Vec<Box<dyn RunObserver>>,
}

impl BenchmarkRunController<SystemClock> {
    /// Creates an idle controller reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for BenchmarkRunController<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BenchmarkRunController<C> {
    /// Creates an idle controller reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: RunState::Idle,
            mode: RunMode::default(),
            sampler: StatSampler::new(),
            run_id: 0,
            started_at: None,
            started_wall: None,
            deadline: None,
            exiting: false,
            report: None,
            observers: Vec::new(),
        }
    }

    /// Registers an observer (builder style).
    pub fn with_observer(mut self, observer: impl RunObserver + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    /// Registers an observer.
    pub fn add_observer(&mut self, observer: impl RunObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Starts a run, discarding samples and results of any previous run.
    ///
    /// Timed runs return a token for the automatic stop; scripted runs return `None`
    /// and keep running until [`stop`](Self::stop) is called. Starting while a run is
    /// in progress restarts it, and tokens issued for the old run become inert.
    pub fn start(&mut self, mode: RunMode, duration: Duration) -> Option<AutoStopToken> {
        if self.state == RunState::Running {
            debug!(run_id = self.run_id, "restarting benchmark run in progress");
        }

        let now = self.clock.now();
        self.run_id += 1;
        self.mode = mode;
        self.exiting = false;
        self.report = None;
        self.sampler.begin();
        self.started_at = Some(now);
        self.started_wall = Some(Utc::now());
        self.deadline = match mode {
            RunMode::Timed => Some(now + duration),
            RunMode::Scripted => None,
        };

        info!(
            run_id = self.run_id,
            ?mode,
            duration_ms = duration.as_millis() as u64,
            "benchmark started"
        );

        self.transition(RunState::Running);
        self.notify(|observer| observer.on_active_changed(true));

        match mode {
            RunMode::Timed => Some(AutoStopToken { run_id: self.run_id, after: duration }),
            RunMode::Scripted => None,
        }
    }

    /// Ends the running run and publishes its report.
    ///
    /// Returns `false` and does nothing unless the state is [`RunState::Running`].
    pub fn stop(&mut self) -> bool {
        if self.state != RunState::Running {
            debug!(state = ?self.state, "ignoring stop outside of a running benchmark");
            return false;
        }

        self.sampler.freeze();
        let elapsed = self.elapsed().unwrap_or_default();
        let started_wall = self.started_wall.unwrap_or_else(Utc::now);
        let report =
            RunReport::from_samples(self.mode, self.sampler.snapshot(), started_wall, elapsed);

        info!(
            run_id = self.run_id,
            samples = report.sample_count(),
            elapsed_ms = elapsed.as_millis() as u64,
            "benchmark finished"
        );

        self.deadline = None;
        self.transition(RunState::Stopped);
        self.notify(|observer| observer.on_active_changed(false));
        self.notify(|observer| observer.on_run_complete(&report));
        self.report = Some(report);
        true
    }

    /// Records the duration of the frame that just ended.
    ///
    /// Ignored unless a run is in progress.
    pub fn on_tick(&mut self, duration_ms: Sample) {
        if self.state == RunState::Running {
            self.sampler.record(duration_ms);
        }
    }

    /// Stops a timed run whose deadline has passed.
    ///
    /// Call once per frame after [`on_tick`](Self::on_tick). Returns whether the run
    /// was stopped by this call.
    pub fn poll(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if self.state == RunState::Running && self.clock.now() >= deadline => {
                self.stop()
            }
            _ => false,
        }
    }

    /// Fires a scheduled automatic stop.
    ///
    /// Ignored if the token belongs to an earlier run, or if the run already stopped
    /// or the session is exiting.
    pub fn on_auto_stop(&mut self, token: AutoStopToken) -> bool {
        if token.run_id != self.run_id || self.exiting || self.state != RunState::Running {
            debug!(
                token_run = token.run_id,
                current_run = self.run_id,
                state = ?self.state,
                "ignoring stale automatic stop"
            );
            return false;
        }
        self.stop()
    }

    /// Leaves the benchmark session from any state.
    ///
    /// A running run is abandoned without a report. Observers are told to discard
    /// their views and return control to navigation.
    pub fn request_exit(&mut self) {
        let was_running = self.state == RunState::Running;
        info!(run_id = self.run_id, state = ?self.state, "benchmark exit requested");

        self.exiting = true;
        self.deadline = None;
        self.report = None;
        self.sampler.freeze();
        self.sampler.clear();

        if was_running {
            self.notify(|observer| observer.on_active_changed(false));
        }
        self.transition(RunState::Idle);
        self.notify(|observer| observer.on_exit());
    }

    /// Exits the session if `input` fired while a session is active.
    pub fn handle_input(&mut self, input: ExitInput) -> bool {
        if input.is_triggered() && self.is_player_locked() {
            self.request_exit();
            true
        } else {
            false
        }
    }

    /// Current state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Mode of the current or last run.
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Whether a run is collecting samples.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Whether a benchmark session is on screen: the player may not move and the
    /// menu and autosave stay disabled.
    pub fn is_player_locked(&self) -> bool {
        self.state != RunState::Idle && !self.exiting
    }

    /// Identifier of the current or last run. Zero before the first run.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Report of the last finished run, while it is on screen.
    pub fn report(&self) -> Option<&RunReport> {
        self.report.as_ref()
    }

    /// Samples of the current or last run, in recording order.
    pub fn samples(&self) -> &[Sample] {
        self.sampler.snapshot()
    }

    /// Time since the current run started, or the length of the last run.
    pub fn elapsed(&self) -> Option<Duration> {
        let started = self.started_at?;
        match self.state {
            RunState::Running => Some(self.clock.now().saturating_duration_since(started)),
            _ => self.report.as_ref().map(|report| report.elapsed),
        }
    }

    /// Time left in a running timed run, never negative.
    pub fn remaining(&self) -> Option<Duration> {
        if self.state != RunState::Running {
            return None;
        }
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(self.clock.now()))
    }

    fn transition(&mut self, to: RunState) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        self.notify(|observer| observer.on_state_changed(from, to));
    }

    fn notify(&mut self, mut f: impl FnMut(&mut dyn RunObserver)) {
        for observer in &mut self.observers {
            f(observer.as_mut());
        }
    }
}

impl<C: Clock> fmt::Debug for BenchmarkRunController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkRunController")
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("run_id", &self.run_id)
            .field("samples", &self.sampler.len())
            .field("exiting", &self.exiting)
            .field("observers", &self.observers.len())
            .finish()
    }
}
