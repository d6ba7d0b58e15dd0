use quiz_core::model::{OptionLetter, QuestionId};

use super::controller::{QuizController, QuizPhase};
use super::timer::TimerState;

/// What the primary button does on the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Next,
    Submit,
}

impl NextAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Submit => "Submit Quiz",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub letter: OptionLetter,
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerView {
    pub remaining: u32,
    pub urgent: bool,
    /// Time ran out earlier; the next tick moves on again.
    pub expired: bool,
}

/// Presentation-agnostic snapshot of the question on screen.
///
/// The UI maps this onto markup; it carries no formatting beyond labels.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub question_id: QuestionId,
    /// 1-based position of the question.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub previous_enabled: bool,
    pub next_action: NextAction,
    pub progress_percent: f64,
    pub timer: Option<TimerView>,
    pub submitting: bool,
    pub confirming_quit: bool,
    pub answered: usize,
}

impl QuestionView {
    #[must_use]
    pub fn selected(&self) -> Option<OptionLetter> {
        self.options
            .iter()
            .find(|option| option.selected)
            .map(|option| option.letter)
    }
}

/// Build the view for the controller's current question.
#[must_use]
pub fn render(session: &QuizController) -> QuestionView {
    let question = session.current_question();
    let selected = session.selected();
    let total = session.len();
    let number = session.cursor() + 1;

    let options = OptionLetter::ALL
        .iter()
        .map(|&letter| OptionView {
            letter,
            text: question.option(letter).to_owned(),
            selected: selected == Some(letter),
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let progress_percent = number as f64 / total as f64 * 100.0;

    let timer = session.timer_settings().and_then(|settings| {
        let remaining = match session.timer_state() {
            TimerState::Running { remaining, .. } => Some(remaining),
            TimerState::Stopped => session.remaining_for(question.id()),
        }?;
        Some(TimerView {
            remaining,
            urgent: settings.is_urgent(remaining),
            expired: remaining == 0,
        })
    });

    QuestionView {
        question_id: question.id(),
        number,
        total,
        prompt: question.prompt().to_owned(),
        options,
        previous_enabled: !session.is_first(),
        next_action: if session.is_last() {
            NextAction::Submit
        } else {
            NextAction::Next
        },
        progress_percent,
        timer,
        submitting: session.phase() == QuizPhase::Submitting,
        confirming_quit: session.is_confirming_quit(),
        answered: session.answers().len(),
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::model::Question;

    use super::super::controller::TimerMode;
    use super::super::timer::testing::RecordingScheduler;
    use super::*;

    fn questions(n: u64) -> Vec<Question> {
        (1..=n)
            .map(|id| Question {
                id: QuestionId::new(id),
                question: format!("What is {id}?"),
                option_a: format!("{id}a"),
                option_b: format!("{id}b"),
                option_c: format!("{id}c"),
                option_d: format!("{id}d"),
            })
            .collect()
    }

    #[test]
    fn first_question_disables_previous() {
        let session = QuizController::start(questions(3), TimerMode::Untimed).unwrap();
        let view = render(&session);

        assert_eq!(view.number, 1);
        assert_eq!(view.total, 3);
        assert_eq!(view.prompt, "What is 1?");
        assert!(!view.previous_enabled);
        assert_eq!(view.next_action, NextAction::Next);
        assert!(view.timer.is_none());
        assert_eq!(view.options.len(), 4);
        assert_eq!(view.options[2].text, "1c");
        assert!((view.progress_percent - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn last_question_offers_submit() {
        let mut session = QuizController::start(questions(2), TimerMode::Untimed).unwrap();
        session.advance();
        let view = render(&session);

        assert!(view.previous_enabled);
        assert_eq!(view.next_action, NextAction::Submit);
        assert_eq!(view.next_action.label(), "Submit Quiz");
        assert!((view.progress_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn single_question_is_first_and_last() {
        let session = QuizController::start(questions(1), TimerMode::Untimed).unwrap();
        let view = render(&session);
        assert!(!view.previous_enabled);
        assert_eq!(view.next_action, NextAction::Submit);
    }

    #[test]
    fn view_restores_previous_answer() {
        let mut session = QuizController::start(questions(2), TimerMode::Untimed).unwrap();
        session.select(OptionLetter::C);
        session.advance();
        session.retreat();

        let view = render(&session);
        assert_eq!(view.selected(), Some(OptionLetter::C));
        assert_eq!(view.answered, 1);
        assert_eq!(
            view.options.iter().filter(|option| option.selected).count(),
            1
        );
    }

    #[test]
    fn timed_view_reports_countdown() {
        let scheduler = RecordingScheduler::default();
        let mut session =
            QuizController::start(questions(1), TimerMode::timed(scheduler.clone())).unwrap();
        assert_eq!(
            render(&session).timer,
            Some(TimerView {
                remaining: 30,
                urgent: false,
                expired: false,
            })
        );

        let token = scheduler.last().unwrap();
        for _ in 0..21 {
            session.tick(token);
        }
        assert_eq!(
            render(&session).timer,
            Some(TimerView {
                remaining: 9,
                urgent: true,
                expired: false,
            })
        );
    }

    #[test]
    fn revisited_question_shows_expired_clock() {
        let scheduler = RecordingScheduler::default();
        let mut session =
            QuizController::start(questions(2), TimerMode::timed(scheduler.clone())).unwrap();
        let token = scheduler.last().unwrap();
        for _ in 0..30 {
            session.tick(token);
        }
        assert_eq!(session.cursor(), 1);

        session.retreat();
        let timer = render(&session).timer.unwrap();
        assert_eq!(timer.remaining, 0);
        assert!(timer.expired);
    }

    #[test]
    fn submitting_flag_follows_phase() {
        let mut session = QuizController::start(questions(1), TimerMode::Untimed).unwrap();
        let _ = session.begin_submit().unwrap();
        assert!(render(&session).submitting);
        session.submission_failed();
        assert!(!render(&session).submitting);
    }
}
