use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::time::fixed_clock;
use services::AppServices;
use services::api::StubBackend;
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{
    AnswersView, DashboardView, FlashMessage, HomeView, QuizConfirmView, QuizView, ResultsView,
    use_feedback_provider,
};
use crate::vm::QuizIntent;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewKind {
    Home,
    Dashboard,
    QuizConfirm,
    Quiz { timed: bool },
    Results { score: u32, total: u32, percentage: f64 },
    Answers,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    // Pages navigate to app routes; the harness only needs to leave the view.
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! { p { id: "left-view", "{path}" } }
}

#[component]
fn Root() -> Element {
    use_feedback_provider();
    let view = use_context::<ViewKind>();
    let page = match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::QuizConfirm => rsx! { QuizConfirmView {} },
        ViewKind::Quiz { timed } => rsx! { QuizView { timed } },
        ViewKind::Results {
            score,
            total,
            percentage,
        } => rsx! { ResultsView { score, total, percentage } },
        ViewKind::Answers => rsx! { AnswersView {} },
    };
    rsx! {
        {page}
        FlashMessage {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub stub: StubBackend,
    pub services: AppServices,
    pub quiz_handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until pending resources have had a chance to settle.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn send(&mut self, intent: QuizIntent) {
        let handles = self.quiz_handles.clone();
        self.dom.in_runtime(|| handles.send(intent));
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Stub backend with the sample question bank and `admin@example.com` signed in.
pub fn signed_in_stub() -> StubBackend {
    let stub = StubBackend::with_sample_data();
    stub.sign_in_as("admin@example.com");
    stub
}

pub fn setup_view_harness(view: ViewKind, stub: StubBackend) -> ViewHarness {
    let storage = Storage::in_memory();
    let services = AppServices::new(Arc::new(stub.clone()), &storage, fixed_clock());
    let quiz_handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(services.clone()),
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        stub,
        services,
        quiz_handles,
    }
}
