use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use quiz_core::model::SECONDS_PER_QUESTION;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Feedback, ViewError, ViewState, leave_on_error, view_state_from_resource};

#[component]
pub fn QuizConfirmView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let feedback = use_context::<Feedback>();

    let overview = {
        let auth = ctx.auth();
        let flow = ctx.quiz_flow();
        use_resource(move || {
            let auth = auth.clone();
            let flow = flow.clone();
            async move {
                let result = match auth.require_user().await {
                    Ok(_) => flow.overview().await,
                    Err(err) => Err(err),
                }
                .map_err(ViewError::from);
                if let Err(err) = &result {
                    leave_on_error(err, feedback, navigator);
                }
                result
            }
        })
    };

    let body = match view_state_from_resource(&overview) {
        ViewState::Idle | ViewState::Loading => rsx! { p { "Counting questions..." } },
        ViewState::Error(err) => rsx! { p { class: "error", "{err.message()}" } },
        ViewState::Ready(overview) => rsx! {
            div { class: "quiz-info",
                p {
                    "Questions: "
                    strong { id: "totalQuestions", "{overview.question_count()}" }
                }
                p {
                    "Estimated time: "
                    strong { id: "totalTime", "{overview.total_minutes()}" }
                    " minutes"
                }
                p { "Each question has {SECONDS_PER_QUESTION} seconds. When time runs out the quiz moves on." }
            }
            div { class: "actions",
                Link { class: "btn", to: Route::Quiz { timed: true }, "Start Quiz" }
                Link { class: "btn secondary", to: Route::Quiz { timed: false }, "Practice Without Timer" }
                Link { class: "btn secondary", to: Route::Dashboard {}, "Back to Dashboard" }
            }
        },
    };

    rsx! {
        div { class: "page quiz-confirm",
            h1 { "Ready to Start?" }
            {body}
        }
    }
}
