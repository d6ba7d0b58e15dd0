use dioxus::prelude::*;
use dioxus_router::Link;

use services::CachedResult;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AnswerReviewVm, format_datetime, map_answer_reviews};

const NO_RESULTS_MESSAGE: &str = "No quiz data found. Please take a quiz first.";
const STALE_RESULTS_MESSAGE: &str =
    "Saved quiz data could not be read. Please take a quiz again.";

#[derive(Clone, Debug, PartialEq, Eq)]
enum ReviewState {
    Empty(&'static str),
    Ready {
        saved_at: String,
        reviews: Vec<AnswerReviewVm>,
    },
}

impl From<CachedResult> for ReviewState {
    fn from(cached: CachedResult) -> Self {
        match cached {
            CachedResult::Missing => Self::Empty(NO_RESULTS_MESSAGE),
            CachedResult::Stale => Self::Empty(STALE_RESULTS_MESSAGE),
            CachedResult::Present { saved_at, result } if result.results.is_empty() => {
                log::debug!("cached result from {saved_at} has no answered questions");
                Self::Empty(NO_RESULTS_MESSAGE)
            }
            CachedResult::Present { saved_at, result } => Self::Ready {
                saved_at: format_datetime(saved_at),
                reviews: map_answer_reviews(&result.results),
            },
        }
    }
}

#[component]
pub fn AnswersView() -> Element {
    let ctx = use_context::<AppContext>();

    let resource = {
        let results = ctx.results();
        use_resource(move || {
            let results = results.clone();
            async move {
                results.load().await.map(ReviewState::from).map_err(|err| {
                    log::warn!("failed to read cached quiz result: {err}");
                    ViewError::Unknown
                })
            }
        })
    };

    let body = match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => rsx! { p { "Loading answers..." } },
        ViewState::Error(err) => rsx! { p { class: "error", "{err.message()}" } },
        ViewState::Ready(ReviewState::Empty(message)) => rsx! { p { "{message}" } },
        ViewState::Ready(ReviewState::Ready { saved_at, reviews }) => rsx! {
            p { class: "saved-at", "Submitted {saved_at}" }
            for review in reviews {
                ReviewCard { review }
            }
        },
    };

    rsx! {
        div { class: "page answers",
            h1 { "Answer Review" }
            div { id: "answersContainer", {body} }
            Link { class: "btn secondary", to: Route::Dashboard {}, "Back to Dashboard" }
        }
    }
}

#[component]
fn ReviewCard(review: AnswerReviewVm) -> Element {
    let class = if review.is_correct {
        "question-review correct"
    } else {
        "question-review incorrect"
    };
    rsx! {
        div { class,
            h3 { "{review.heading}" }
            p { class: "review-question", "{review.question}" }
            div { class: "review-options",
                for (letter, text) in review.options.iter() {
                    p { key: "{letter}",
                        strong { "{letter}:" }
                        " {text}"
                    }
                }
            }
            p {
                strong { "Your Answer:" }
                " {review.your_answer}"
            }
            p { class: "correct-answer",
                strong { "Correct Answer: {review.correct_answer}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::model::QuizResult;
    use quiz_core::time::fixed_now;

    use super::*;

    #[test]
    fn missing_and_stale_show_messages() {
        assert_eq!(
            ReviewState::from(CachedResult::Missing),
            ReviewState::Empty(NO_RESULTS_MESSAGE)
        );
        assert_eq!(
            ReviewState::from(CachedResult::Stale),
            ReviewState::Empty(STALE_RESULTS_MESSAGE)
        );
    }

    #[test]
    fn result_without_answers_counts_as_missing() {
        let cached = CachedResult::Present {
            saved_at: fixed_now(),
            result: QuizResult {
                score: 0,
                total: 3,
                percentage: 0.0,
                results: Vec::new(),
            },
        };
        assert_eq!(
            ReviewState::from(cached),
            ReviewState::Empty(NO_RESULTS_MESSAGE)
        );
    }
}
