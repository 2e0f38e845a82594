//! Run lifecycle notifications and host input.
//!
//! The controller never talks to a concrete host. Presentation layers and flag stores
//! register a [`RunObserver`] and are called at every lifecycle transition. For hosts
//! that prefer polling, [`EventQueue`] records the same notifications as [`RunEvent`]
//! values that can be drained once per frame.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use framebench::{
//!     events::{EventQueue, RunEvent},
//!     BenchmarkRunController, RunMode, RunState,
//! };
//!
//! let queue = EventQueue::new();
//! let mut controller = BenchmarkRunController::new().with_observer(queue.clone());
//!
//! controller.start(RunMode::Scripted, Duration::ZERO);
//! controller.on_tick(16.7);
//! controller.stop();
//!
//! let events = queue.drain();
//! assert_eq!(events[0], RunEvent::StateChanged { from: RunState::Idle, to: RunState::Running });
//! assert!(matches!(events.last(), Some(RunEvent::RunComplete(_))));
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{controller::RunState, report::RunReport};

/// Receives lifecycle notifications from the run controller.
///
/// All methods have empty defaults so implementors only override what they use.
pub trait RunObserver {
    /// The run state changed.
    fn on_state_changed(&mut self, _from: RunState, _to: RunState) {}

    /// The "benchmark active" flag changed: `true` on start, `false` on stop or exit.
    fn on_active_changed(&mut self, _active: bool) {}

    /// A run finished and its report is ready to render.
    fn on_run_complete(&mut self, _report: &RunReport) {}

    /// Views must be discarded and control returned to navigation.
    fn on_exit(&mut self) {}
}

/// A recorded lifecycle notification.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// See [`RunObserver::on_state_changed`].
    StateChanged {
        /// Previous state.
        from: RunState,
        /// New state.
        to: RunState,
    },
    /// See [`RunObserver::on_active_changed`].
    ActiveChanged(bool),
    /// See [`RunObserver::on_run_complete`].
    RunComplete(Box<RunReport>),
    /// See [`RunObserver::on_exit`].
    Exit,
}

/// Shared, clonable log of [`RunEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Rc<RefCell<Vec<RunEvent>>>,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every queued event, oldest first.
    pub fn drain(&self) -> Vec<RunEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Number of queued [`RunEvent::RunComplete`] events.
    pub fn completions(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, RunEvent::RunComplete(_)))
            .count()
    }

    fn push(&self, event: RunEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl RunObserver for EventQueue {
    fn on_state_changed(&mut self, from: RunState, to: RunState) {
        self.push(RunEvent::StateChanged { from, to });
    }

    fn on_active_changed(&mut self, active: bool) {
        self.push(RunEvent::ActiveChanged(active));
    }

    fn on_run_complete(&mut self, report: &RunReport) {
        self.push(RunEvent::RunComplete(Box::new(report.clone())));
    }

    fn on_exit(&mut self) {
        self.push(RunEvent::Exit);
    }
}

/// Input sampled by the host on one frame.
///
/// Any repeated confirm, cancel or touch press ends the benchmark session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitInput {
    /// Confirm button repeated.
    pub ok: bool,
    /// Cancel button repeated.
    pub cancel: bool,
    /// Touch or mouse press repeated.
    pub touch: bool,
}

impl ExitInput {
    /// Input with nothing pressed.
    pub const NONE: ExitInput = ExitInput { ok: false, cancel: false, touch: false };

    /// Whether any exit input fired.
    pub fn is_triggered(&self) -> bool {
        self.ok || self.cancel || self.touch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_input_triggered() {
        assert!(!ExitInput::NONE.is_triggered());
        assert!(ExitInput { ok: true, ..ExitInput::NONE }.is_triggered());
        assert!(ExitInput { cancel: true, ..ExitInput::NONE }.is_triggered());
        assert!(ExitInput { touch: true, ..ExitInput::NONE }.is_triggered());
    }

    #[test]
    fn test_event_queue_records_in_order() {
        let mut queue = EventQueue::new();
        queue.on_active_changed(true);
        queue.on_state_changed(RunState::Idle, RunState::Running);
        queue.on_exit();

        assert_eq!(queue.len(), 3);
        assert_eq!(
            queue.drain(),
            vec![
                RunEvent::ActiveChanged(true),
                RunEvent::StateChanged { from: RunState::Idle, to: RunState::Running },
                RunEvent::Exit,
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_event_queue_clones_share_log() {
        let queue = EventQueue::new();
        let mut observer = queue.clone();
        observer.on_exit();

        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_default_observer_methods_are_noops() {
        struct Silent;
        impl RunObserver for Silent {}

        let mut silent = Silent;
        silent.on_exit();
        silent.on_active_changed(false);
    }
}
