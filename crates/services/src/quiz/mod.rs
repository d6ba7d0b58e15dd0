mod controller;
pub mod timer;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use controller::{QuizController, QuizPhase, TickOutcome, TimerMode, Transition};
pub use timer::{TickScheduler, TickToken, TimerHandle, TimerSettings, TimerState};
pub use view::{NextAction, OptionView, QuestionView, TimerView, render};
pub use workflow::QuizFlowService;
