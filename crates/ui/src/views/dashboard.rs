use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Feedback, ViewError, ViewState, leave_on_error, view_state_from_resource};
use crate::vm::DashboardVm;

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let feedback = use_context::<Feedback>();

    let resource = {
        let auth = ctx.auth();
        use_resource(move || {
            let auth = auth.clone();
            async move {
                let result = auth
                    .dashboard()
                    .await
                    .map(DashboardVm::from)
                    .map_err(ViewError::from);
                if let Err(err) = &result {
                    leave_on_error(err, feedback, navigator);
                }
                result
            }
        })
    };

    let on_start = move |_| {
        let has_questions = match &*resource.read() {
            Some(Ok(vm)) => vm.has_questions(),
            _ => false,
        };
        if has_questions {
            navigator.push(Route::QuizConfirm {});
        } else {
            feedback.error(ViewError::NoQuestions.message());
        }
    };

    let body = match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => rsx! { p { "Loading dashboard..." } },
        ViewState::Error(err) => rsx! { p { class: "error", "{err.message()}" } },
        ViewState::Ready(vm) => rsx! {
            div { class: "user-info",
                h2 {
                    "Welcome, "
                    span { id: "userEmail", "{vm.email}" }
                }
                if vm.is_admin {
                    span { id: "adminBadge", class: "badge", "Admin" }
                }
            }
            div { class: "stats",
                div { class: "stat",
                    span { class: "stat-value", "{vm.question_count}" }
                    span { class: "stat-label", "Questions available" }
                }
                div { class: "stat",
                    span { class: "stat-value", "{vm.quiz_attempts}" }
                    span { class: "stat-label", "Quizzes taken" }
                }
            }
            div { class: "actions",
                if vm.is_admin {
                    div { id: "adminPanel", class: "admin-panel",
                        Link { class: "btn", to: Route::Upload {}, "Upload Questions" }
                    }
                }
                button { class: "btn", onclick: on_start, "Start Quiz" }
                Link { class: "btn secondary", to: Route::Answers {}, "Review Last Answers" }
            }
        },
    };

    rsx! {
        div { class: "page dashboard",
            h1 { "Dashboard" }
            {body}
        }
    }
}
