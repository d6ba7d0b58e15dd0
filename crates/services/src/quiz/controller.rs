use std::collections::HashMap;

use quiz_core::model::{AnswerSheet, OptionLetter, Question, QuestionId};

use super::timer::{QuestionTimer, TickResult, TickScheduler, TickToken, TimerSettings, TimerState};
use crate::error::SessionError;

/// Whether questions are answered against a countdown.
pub enum TimerMode {
    Untimed,
    Timed {
        scheduler: Box<dyn TickScheduler>,
        settings: TimerSettings,
    },
}

impl TimerMode {
    /// Timed mode with the default 30 second budget per question.
    pub fn timed(scheduler: impl TickScheduler + 'static) -> Self {
        Self::Timed {
            scheduler: Box::new(scheduler),
            settings: TimerSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    /// Answers are on their way to the backend; navigation is blocked.
    Submitting,
    Submitted,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: usize, to: usize },
    Stayed,
    /// Next was pressed on the last question; the caller should submit.
    SubmitRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Stale,
    Ticked { remaining: u32, urgent: bool },
    /// Time ran out and the session moved on exactly as if Next was pressed.
    AutoAdvanced(Transition),
}

/// State of one quiz attempt: which question is shown, what was answered,
/// and how much time each question has left.
///
/// Built per attempt and dropped when the quiz page goes away.
#[derive(Debug)]
pub struct QuizController {
    questions: Vec<Question>,
    cursor: usize,
    answers: AnswerSheet,
    remaining: HashMap<QuestionId, u32>,
    selected: Option<OptionLetter>,
    timer: Option<QuestionTimer>,
    phase: QuizPhase,
    confirming_quit: bool,
}

impl QuizController {
    /// Start an attempt on the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQuestionSet` if `questions` is empty.
    pub fn start(questions: Vec<Question>, mode: TimerMode) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyQuestionSet);
        }
        let timer = match mode {
            TimerMode::Untimed => None,
            TimerMode::Timed {
                scheduler,
                settings,
            } => Some(QuestionTimer::new(scheduler, settings)),
        };
        let mut session = Self {
            questions,
            cursor: 0,
            answers: AnswerSheet::new(),
            remaining: HashMap::new(),
            selected: None,
            timer,
            phase: QuizPhase::Answering,
            confirming_quit: false,
        };
        session.enter_current();
        Ok(session)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.cursor]
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn selected(&self) -> Option<OptionLetter> {
        self.selected
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn timer_settings(&self) -> Option<TimerSettings> {
        self.timer.as_ref().map(QuestionTimer::settings)
    }

    #[must_use]
    pub fn timer_state(&self) -> TimerState {
        self.timer
            .as_ref()
            .map_or(TimerState::Stopped, QuestionTimer::state)
    }

    /// Seconds left for `id`, if the question has been shown in timed mode.
    #[must_use]
    pub fn remaining_for(&self, id: QuestionId) -> Option<u32> {
        self.remaining.get(&id).copied()
    }

    #[must_use]
    pub fn is_confirming_quit(&self) -> bool {
        self.confirming_quit
    }

    fn accepts_input(&self) -> bool {
        self.phase == QuizPhase::Answering && !self.confirming_quit
    }

    /// Mark `letter` as the selected radio option of the current question.
    pub fn select(&mut self, letter: OptionLetter) {
        if self.accepts_input() {
            self.selected = Some(letter);
        }
    }

    /// Store the current selection as the answer to the current question.
    ///
    /// Does nothing when no option is selected.
    pub fn record_answer(&mut self) -> Option<OptionLetter> {
        let letter = self.selected?;
        let id = self.current_question().id();
        self.answers.record(id, letter);
        Some(letter)
    }

    pub fn advance(&mut self) -> Transition {
        if !self.accepts_input() {
            return Transition::Stayed;
        }
        self.record_answer();
        if self.is_last() {
            return Transition::SubmitRequested;
        }
        let from = self.cursor;
        self.leave_current();
        self.cursor += 1;
        self.enter_current();
        Transition::Moved {
            from,
            to: self.cursor,
        }
    }

    pub fn retreat(&mut self) -> Transition {
        if !self.accepts_input() || self.is_first() {
            return Transition::Stayed;
        }
        self.record_answer();
        let from = self.cursor;
        self.leave_current();
        self.cursor -= 1;
        self.enter_current();
        Transition::Moved {
            from,
            to: self.cursor,
        }
    }

    /// Apply one timer tick. Ticks from cancelled countdowns are ignored.
    pub fn tick(&mut self, token: TickToken) -> TickOutcome {
        if self.phase != QuizPhase::Answering {
            return TickOutcome::Stale;
        }
        let Some(timer) = self.timer.as_mut() else {
            return TickOutcome::Stale;
        };
        match timer.tick(token) {
            TickResult::Stale => TickOutcome::Stale,
            TickResult::Ticked { remaining, urgent } => {
                self.remaining.insert(token.question_id(), remaining);
                TickOutcome::Ticked { remaining, urgent }
            }
            TickResult::Expired { question_id } => {
                self.remaining.insert(question_id, 0);
                log::debug!("time expired on question {question_id}, advancing");
                TickOutcome::AutoAdvanced(self.advance())
            }
        }
    }

    /// Capture the final answer, stop the clock and hand out the answers to send.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SubmissionInFlight` while a submission is pending,
    /// `SessionError::QuitPending` while the quit prompt is open and
    /// `SessionError::Finished` once the attempt is over.
    pub fn begin_submit(&mut self) -> Result<AnswerSheet, SessionError> {
        match self.phase {
            QuizPhase::Answering => {}
            QuizPhase::Submitting => return Err(SessionError::SubmissionInFlight),
            QuizPhase::Submitted | QuizPhase::Quit => return Err(SessionError::Finished),
        }
        if self.confirming_quit {
            return Err(SessionError::QuitPending);
        }
        self.record_answer();
        self.leave_current();
        self.phase = QuizPhase::Submitting;
        Ok(self.answers.clone())
    }

    pub fn complete_submission(&mut self) {
        if self.phase == QuizPhase::Submitting {
            self.phase = QuizPhase::Submitted;
        }
    }

    /// Return to the current question after a failed submission.
    ///
    /// Answers are kept so the user can retry; the clock resumes only if the
    /// question still has time left.
    pub fn submission_failed(&mut self) {
        if self.phase == QuizPhase::Submitting {
            self.phase = QuizPhase::Answering;
            self.resume_timer();
        }
    }

    /// Show the quit confirmation. The clock is paused while it is open.
    pub fn request_quit(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.leave_current();
        self.confirming_quit = true;
        true
    }

    pub fn cancel_quit(&mut self) {
        if self.confirming_quit {
            self.confirming_quit = false;
            self.resume_timer();
        }
    }

    pub fn confirm_quit(&mut self) -> bool {
        if self.phase != QuizPhase::Answering {
            return false;
        }
        self.leave_current();
        self.confirming_quit = false;
        self.phase = QuizPhase::Quit;
        true
    }

    /// Cancel any pending tick, e.g. when the page is torn down.
    pub fn stop(&mut self) {
        self.leave_current();
    }

    fn enter_current(&mut self) {
        let id = self.questions[self.cursor].id();
        self.selected = self.answers.get(id);
        if let Some(timer) = self.timer.as_mut() {
            let remaining = *self
                .remaining
                .entry(id)
                .or_insert(timer.settings().seconds_per_question);
            timer.start(id, remaining);
        }
    }

    fn leave_current(&mut self) {
        if let Some((id, remaining)) = self.timer.as_mut().and_then(QuestionTimer::stop) {
            self.remaining.insert(id, remaining);
        }
    }

    fn resume_timer(&mut self) {
        let id = self.questions[self.cursor].id();
        if let Some(timer) = self.timer.as_mut() {
            let remaining = self
                .remaining
                .get(&id)
                .copied()
                .unwrap_or(timer.settings().seconds_per_question);
            if remaining > 0 {
                timer.start(id, remaining);
            }
        }
    }
}

impl Drop for QuizController {
    fn drop(&mut self) {
        self.stop();
    }
}
