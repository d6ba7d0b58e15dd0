use quiz_core::model::OptionLetter;
use services::quiz::{NextAction, QuestionView, TickToken};
use services::{QuizController, QuizFlowService, TimerMode};

use crate::views::ViewError;

/// Everything the quiz page can ask of its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(OptionLetter),
    Previous,
    Next,
    Submit,
    RequestQuit,
    CancelQuit,
    ConfirmQuit,
    Tick(TickToken),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub letter: OptionLetter,
    pub text: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerVm {
    pub label: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub heading: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub previous_disabled: bool,
    pub next_label: &'static str,
    pub is_last: bool,
    pub progress_style: String,
    pub timer: Option<TimerVm>,
    pub submitting: bool,
    pub confirming_quit: bool,
    pub answered_label: String,
}

impl From<&QuestionView> for QuestionVm {
    fn from(view: &QuestionView) -> Self {
        Self {
            heading: format!("Question {} of {}", view.number, view.total),
            prompt: view.prompt.clone(),
            options: view
                .options
                .iter()
                .map(|option| OptionVm {
                    letter: option.letter,
                    text: option.text.clone(),
                    checked: option.selected,
                })
                .collect(),
            previous_disabled: !view.previous_enabled,
            next_label: view.next_action.label(),
            is_last: view.next_action == NextAction::Submit,
            progress_style: format!("width: {:.0}%", view.progress_percent),
            timer: view.timer.map(|timer| TimerVm {
                label: if timer.expired {
                    "Time's up".to_string()
                } else {
                    format!("{}s", timer.remaining)
                },
                class: if timer.expired {
                    "timer expired"
                } else if timer.urgent {
                    "timer warning"
                } else {
                    "timer"
                },
            }),
            submitting: view.submitting,
            confirming_quit: view.confirming_quit,
            answered_label: format!("{} of {} answered", view.answered, view.total),
        }
    }
}

/// # Errors
///
/// Returns the `ViewError` matching the gate that stopped the quiz.
pub async fn start_quiz(
    flow: &QuizFlowService,
    mode: TimerMode,
) -> Result<QuizController, ViewError> {
    flow.start(mode).await.map_err(ViewError::from)
}

#[cfg(test)]
mod tests {
    use quiz_core::model::{Question, QuestionId};
    use services::quiz::{TimerView, render};

    use super::*;

    fn session(n: u64) -> QuizController {
        let questions = (1..=n)
            .map(|id| Question {
                id: QuestionId::new(id),
                question: format!("Prompt {id}"),
                option_a: "alpha".into(),
                option_b: "beta".into(),
                option_c: "gamma".into(),
                option_d: "delta".into(),
            })
            .collect();
        QuizController::start(questions, TimerMode::Untimed).unwrap()
    }

    #[test]
    fn maps_heading_progress_and_buttons() {
        let mut session = session(4);
        session.select(OptionLetter::B);
        let vm = QuestionVm::from(&render(&session));

        assert_eq!(vm.heading, "Question 1 of 4");
        assert_eq!(vm.progress_style, "width: 25%");
        assert!(vm.previous_disabled);
        assert_eq!(vm.next_label, "Next");
        assert!(!vm.is_last);
        assert!(vm.timer.is_none());
        assert_eq!(
            vm.options
                .iter()
                .filter(|option| option.checked)
                .map(|option| option.letter)
                .collect::<Vec<_>>(),
            [OptionLetter::B]
        );
    }

    #[test]
    fn last_question_shows_submit_label() {
        let mut session = session(2);
        session.select(OptionLetter::A);
        session.advance();
        let vm = QuestionVm::from(&render(&session));

        assert_eq!(vm.next_label, "Submit Quiz");
        assert!(vm.is_last);
        assert!(!vm.previous_disabled);
        assert_eq!(vm.answered_label, "1 of 2 answered");
    }

    #[test]
    fn timer_label_tracks_urgency_and_expiry() {
        let mut view = render(&session(1));
        view.timer = Some(TimerView {
            remaining: 7,
            urgent: true,
            expired: false,
        });
        let timer = QuestionVm::from(&view).timer.unwrap();
        assert_eq!(timer.label, "7s");
        assert_eq!(timer.class, "timer warning");

        view.timer = Some(TimerView {
            remaining: 0,
            urgent: true,
            expired: true,
        });
        let timer = QuestionVm::from(&view).timer.unwrap();
        assert_eq!(timer.label, "Time's up");
        assert_eq!(timer.class, "timer expired");
    }
}
