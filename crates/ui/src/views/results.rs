use dioxus::prelude::*;
use dioxus_router::Link;

use quiz_core::model::ResultSummary;

use crate::routes::Route;
use crate::vm::ResultsVm;

/// Score page. Everything it shows comes from its own address, so a reload
/// shows the same numbers.
#[component]
pub fn ResultsView(score: u32, total: u32, percentage: f64) -> Element {
    let vm = ResultsVm::from(ResultSummary::new(score, total, percentage));

    rsx! {
        div { class: "page results",
            h1 { "Quiz Results" }
            div { class: "score-card",
                div { class: "score",
                    span { id: "score", "{vm.score}" }
                    " / "
                    span { id: "total", "{vm.total}" }
                }
                p { class: "percentage",
                    span { id: "percentage", "{vm.percentage_label}" }
                }
                p {
                    "Incorrect: "
                    span { id: "incorrect", "{vm.incorrect}" }
                }
            }
            div { class: "actions",
                Link { class: "btn", to: Route::Answers {}, "Review Answers" }
                Link { class: "btn secondary", to: Route::QuizConfirm {}, "Take Another Quiz" }
                Link { class: "btn secondary", to: Route::Dashboard {}, "Back to Dashboard" }
            }
        }
    }
}
