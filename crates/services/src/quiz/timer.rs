//! Per-question countdown.
//!
//! The countdown itself is plain state; the once-per-second wakeups come from a
//! `TickScheduler` supplied by the host (a UI task, or a fake in tests). Every
//! scheduled wakeup carries a `TickToken`, and ticks whose token does not match
//! the running countdown are ignored.

use std::fmt;

use quiz_core::model::{QuestionId, SECONDS_PER_QUESTION};

pub const DEFAULT_URGENCY_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub seconds_per_question: u32,
    /// At or below this many seconds the view is flagged as urgent.
    pub urgency_threshold: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            seconds_per_question: SECONDS_PER_QUESTION,
            urgency_threshold: DEFAULT_URGENCY_THRESHOLD,
        }
    }
}

impl TimerSettings {
    #[must_use]
    pub fn is_urgent(&self, remaining: u32) -> bool {
        remaining <= self.urgency_threshold
    }
}

/// Identifies one scheduled countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken {
    question_id: QuestionId,
    generation: u64,
}

impl TickToken {
    #[must_use]
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A scheduled stream of once-per-second ticks.
pub trait TimerHandle {
    /// Stop delivering ticks. Calling it twice is harmless.
    fn cancel(&mut self);
}

/// Starts delivering `tick(token)` calls once per second until cancelled.
pub trait TickScheduler {
    fn schedule(&mut self, token: TickToken) -> Box<dyn TimerHandle>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running { question_id: QuestionId, remaining: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// The token belongs to a countdown that is no longer running.
    Stale,
    Ticked { remaining: u32, urgent: bool },
    /// The countdown reached zero and has stopped itself.
    Expired { question_id: QuestionId },
}

/// Countdown for the question on screen. At most one is running at a time.
pub struct QuestionTimer {
    scheduler: Box<dyn TickScheduler>,
    settings: TimerSettings,
    state: TimerState,
    generation: u64,
    handle: Option<Box<dyn TimerHandle>>,
}

impl fmt::Debug for QuestionTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionTimer")
            .field("settings", &self.settings)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl QuestionTimer {
    #[must_use]
    pub fn new(scheduler: Box<dyn TickScheduler>, settings: TimerSettings) -> Self {
        Self {
            scheduler,
            settings,
            state: TimerState::Stopped,
            generation: 0,
            handle: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Start counting down `remaining` seconds for `question_id`.
    ///
    /// Any running countdown is cancelled first.
    pub fn start(&mut self, question_id: QuestionId, remaining: u32) -> TickToken {
        self.stop();
        self.generation += 1;
        let token = TickToken {
            question_id,
            generation: self.generation,
        };
        self.handle = Some(self.scheduler.schedule(token));
        self.state = TimerState::Running {
            question_id,
            remaining,
        };
        token
    }

    /// Cancel the pending ticks, returning the countdown that was running.
    pub fn stop(&mut self) -> Option<(QuestionId, u32)> {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
        }
        match std::mem::replace(&mut self.state, TimerState::Stopped) {
            TimerState::Running {
                question_id,
                remaining,
            } => Some((question_id, remaining)),
            TimerState::Stopped => None,
        }
    }

    pub fn tick(&mut self, token: TickToken) -> TickResult {
        let TimerState::Running {
            question_id,
            remaining,
        } = self.state
        else {
            return TickResult::Stale;
        };
        if token.generation != self.generation || token.question_id != question_id {
            return TickResult::Stale;
        }

        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.stop();
            return TickResult::Expired { question_id };
        }

        self.state = TimerState::Running {
            question_id,
            remaining,
        };
        TickResult::Ticked {
            remaining,
            urgent: self.settings.is_urgent(remaining),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{TickScheduler, TickToken, TimerHandle};

    /// Records every schedule/cancel so tests can inspect live countdowns.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingScheduler {
        inner: Rc<RefCell<Vec<(TickToken, bool)>>>,
    }

    impl RecordingScheduler {
        /// Tokens whose handle has not been cancelled.
        pub(crate) fn live(&self) -> Vec<TickToken> {
            self.inner
                .borrow()
                .iter()
                .filter(|(_, cancelled)| !cancelled)
                .map(|(token, _)| *token)
                .collect()
        }

        pub(crate) fn scheduled(&self) -> usize {
            self.inner.borrow().len()
        }

        pub(crate) fn last(&self) -> Option<TickToken> {
            self.inner.borrow().last().map(|(token, _)| *token)
        }
    }

    struct RecordingHandle {
        inner: Rc<RefCell<Vec<(TickToken, bool)>>>,
        index: usize,
    }

    impl TimerHandle for RecordingHandle {
        fn cancel(&mut self) {
            if let Some(entry) = self.inner.borrow_mut().get_mut(self.index) {
                entry.1 = true;
            }
        }
    }

    impl TickScheduler for RecordingScheduler {
        fn schedule(&mut self, token: TickToken) -> Box<dyn TimerHandle> {
            let mut entries = self.inner.borrow_mut();
            entries.push((token, false));
            Box::new(RecordingHandle {
                inner: Rc::clone(&self.inner),
                index: entries.len() - 1,
            })
        }
    }
}
