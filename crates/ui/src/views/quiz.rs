use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Navigator, use_navigator};
use futures_util::StreamExt;

use services::quiz::{TickOutcome, TickScheduler, TickToken, TimerHandle, Transition, render};
use services::{QuizController, QuizFlowService, TimerMode};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Feedback, ViewError, ViewState, leave_on_error, view_state_from_resource};
use crate::vm::{QuestionVm, QuizIntent, start_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Delivers countdown ticks to the quiz page's intent loop.
struct DioxusTicker {
    intents: Coroutine<QuizIntent>,
}

impl TickScheduler for DioxusTicker {
    fn schedule(&mut self, token: TickToken) -> Box<dyn TimerHandle> {
        let intents = self.intents;
        let task = spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            // The first tick of an interval completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                intents.send(QuizIntent::Tick(token));
            }
        });
        Box::new(TaskHandle(Some(task)))
    }
}

struct TaskHandle(Option<Task>);

impl TimerHandle for TaskHandle {
    fn cancel(&mut self) {
        if let Some(task) = self.0.take() {
            task.cancel();
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Stay,
    Submit,
    Quit,
}

fn apply_intent(mut session: Signal<Option<QuizController>>, intent: QuizIntent) -> Step {
    let mut guard = session.write();
    let Some(quiz) = guard.as_mut() else {
        return Step::Stay;
    };
    let transition = match intent {
        QuizIntent::Select(letter) => {
            quiz.select(letter);
            return Step::Stay;
        }
        QuizIntent::Previous => quiz.retreat(),
        QuizIntent::Next => quiz.advance(),
        QuizIntent::Submit if quiz.is_confirming_quit() => return Step::Stay,
        QuizIntent::Submit => return Step::Submit,
        QuizIntent::RequestQuit => {
            quiz.request_quit();
            return Step::Stay;
        }
        QuizIntent::CancelQuit => {
            quiz.cancel_quit();
            return Step::Stay;
        }
        QuizIntent::ConfirmQuit => {
            return if quiz.confirm_quit() {
                Step::Quit
            } else {
                Step::Stay
            };
        }
        QuizIntent::Tick(token) => match quiz.tick(token) {
            TickOutcome::AutoAdvanced(transition) => transition,
            TickOutcome::Stale | TickOutcome::Ticked { .. } => return Step::Stay,
        },
    };
    if transition == Transition::SubmitRequested {
        Step::Submit
    } else {
        Step::Stay
    }
}

async fn submit_session(
    flow: &QuizFlowService,
    mut session: Signal<Option<QuizController>>,
    feedback: Feedback,
    navigator: Navigator,
) {
    let answers = {
        let mut guard = session.write();
        let Some(quiz) = guard.as_mut() else {
            return;
        };
        match quiz.begin_submit() {
            Ok(answers) => answers,
            Err(err) => {
                log::debug!("ignoring submit request: {err}");
                return;
            }
        }
    };

    feedback.set_loading(true);
    let outcome = flow.submit_answers(&answers).await;
    feedback.set_loading(false);

    let settled = match session.write().as_mut() {
        Some(quiz) => QuizFlowService::settle_submission(quiz, outcome),
        None => outcome,
    };
    match settled {
        Ok(summary) => {
            navigator.push(Route::Results {
                score: summary.score,
                total: summary.total,
                percentage: summary.percentage,
            });
        }
        Err(err) => feedback.error(ViewError::from(err).message()),
    }
}

#[component]
pub fn QuizView(timed: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let feedback = use_context::<Feedback>();
    let session = use_signal(|| None::<QuizController>);

    let intents = {
        let flow = ctx.quiz_flow();
        use_coroutine(move |mut rx: UnboundedReceiver<QuizIntent>| {
            let flow = flow.clone();
            async move {
                while let Some(intent) = rx.next().await {
                    match apply_intent(session, intent) {
                        Step::Stay => {}
                        Step::Submit => submit_session(&flow, session, feedback, navigator).await,
                        Step::Quit => {
                            navigator.push(Route::Dashboard {});
                        }
                    }
                }
            }
        })
    };

    let resource = {
        let auth = ctx.auth();
        let flow = ctx.quiz_flow();
        use_resource(move || {
            let auth = auth.clone();
            let flow = flow.clone();
            let mut session = session;
            async move {
                let result = match auth.require_user().await {
                    Ok(_) => {
                        let mode = if timed {
                            TimerMode::timed(DioxusTicker { intents })
                        } else {
                            TimerMode::Untimed
                        };
                        start_quiz(&flow, mode).await
                    }
                    Err(err) => Err(ViewError::from(err)),
                };
                match result {
                    Ok(quiz) => {
                        session.set(Some(quiz));
                        Ok(())
                    }
                    Err(err) => {
                        leave_on_error(&err, feedback, navigator);
                        Err(err)
                    }
                }
            }
        })
    };

    use_drop(move || {
        let mut session = session;
        if let Ok(mut guard) = session.try_write()
            && let Some(quiz) = guard.as_mut()
        {
            quiz.stop();
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<QuizTestHandles>() {
            handles.register(intents);
        }
    }

    let vm = session.read().as_ref().map(|quiz| QuestionVm::from(&render(quiz)));
    let Some(vm) = vm else {
        let body = match view_state_from_resource(&resource) {
            ViewState::Error(err) => rsx! { p { class: "error", "{err.message()}" } },
            _ => rsx! { p { "Loading questions..." } },
        };
        return rsx! {
            div { class: "page quiz", {body} }
        };
    };

    let busy = vm.submitting;
    let options = vm.options.iter().map(|option| {
        let letter = option.letter;
        rsx! {
            label { key: "{letter}", class: "option",
                input {
                    r#type: "radio",
                    name: "answer",
                    value: "{letter}",
                    checked: option.checked,
                    disabled: busy,
                    onchange: move |_| intents.send(QuizIntent::Select(letter)),
                }
                " {option.text}"
            }
        }
    });

    rsx! {
        div { class: "page quiz",
            div { class: "quiz-header",
                h2 { "{vm.heading}" }
                if let Some(timer) = vm.timer.as_ref() {
                    div { id: "timer", class: timer.class, "{timer.label}" }
                }
                button {
                    class: "quit-btn",
                    disabled: busy,
                    onclick: move |_| intents.send(QuizIntent::RequestQuit),
                    "Quit Quiz"
                }
            }
            div { class: "progress-bar",
                div { id: "progressFill", class: "progress-fill", style: "{vm.progress_style}" }
            }
            div { class: "question-container",
                p { class: "prompt", "{vm.prompt}" }
                div { class: "options", {options} }
                div { class: "navigation",
                    button {
                        class: "nav-btn-large",
                        disabled: vm.previous_disabled || busy,
                        onclick: move |_| intents.send(QuizIntent::Previous),
                        "Previous"
                    }
                    if vm.is_last {
                        button {
                            class: "nav-btn-large submit-btn",
                            disabled: busy,
                            onclick: move |_| intents.send(QuizIntent::Submit),
                            "{vm.next_label}"
                        }
                    } else {
                        button {
                            class: "nav-btn-large",
                            disabled: busy,
                            onclick: move |_| intents.send(QuizIntent::Next),
                            "{vm.next_label}"
                        }
                    }
                }
                p { class: "answered", "{vm.answered_label}" }
            }
            if vm.confirming_quit {
                div { class: "modal",
                    div { class: "modal-content",
                        p { "Are you sure you want to quit the quiz? Your progress will be lost." }
                        button {
                            class: "btn danger",
                            onclick: move |_| intents.send(QuizIntent::ConfirmQuit),
                            "Quit"
                        }
                        button {
                            class: "btn secondary",
                            onclick: move |_| intents.send(QuizIntent::CancelQuit),
                            "Keep Going"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    intents: Rc<RefCell<Option<Coroutine<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, intents: Coroutine<QuizIntent>) {
        *self.intents.borrow_mut() = Some(intents);
    }

    pub(crate) fn send(&self, intent: QuizIntent) {
        let intents = (*self.intents.borrow()).expect("quiz intents registered");
        intents.send(intent);
    }
}
