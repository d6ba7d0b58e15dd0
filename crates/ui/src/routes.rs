use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};

use crate::context::AppContext;
use crate::views::{
    AnswersView, DashboardView, Feedback, FlashMessage, HomeView, LoadingOverlay, LoginView,
    QuizConfirmView, QuizView, RegisterView, ResultsView, UploadView, ViewError,
    use_feedback_provider,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/login", LoginView)] Login {},
        #[route("/register", RegisterView)] Register {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/upload", UploadView)] Upload {},
        #[route("/quiz/confirm", QuizConfirmView)] QuizConfirm {},
        #[route("/quiz?:timed", QuizView)] Quiz { timed: bool },
        #[route("/results?:score&:total&:percentage", ResultsView)]
        Results { score: u32, total: u32, percentage: f64 },
        #[route("/answers", AnswersView)] Answers {},
}

#[component]
fn Layout() -> Element {
    use_feedback_provider();
    rsx! {
        div { class: "app",
            NavBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            FlashMessage {}
            LoadingOverlay {}
        }
    }
}

#[component]
fn NavBar() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let feedback = use_context::<Feedback>();
    let route = use_route::<Route>();

    // Re-check the session on every navigation.
    let user = {
        let auth = ctx.auth();
        use_resource(use_reactive!(|route| {
            let auth = auth.clone();
            async move {
                log::trace!("checking session for {route}");
                auth.require_user().await.ok()
            }
        }))
    };
    let logged_in = user.read().as_ref().is_some_and(Option::is_some);

    let on_logout = {
        let auth = ctx.auth();
        move |_| {
            let auth = auth.clone();
            let mut user = user;
            spawn(async move {
                match auth.logout().await {
                    Ok(()) => {
                        feedback.success("Logout successful!");
                        user.restart();
                        navigator.push(Route::Home {});
                    }
                    Err(err) => feedback.error(ViewError::from(err).message()),
                }
            });
        }
    };

    rsx! {
        nav { class: "navbar",
            Link { class: "brand", to: Route::Home {}, "Quiz App" }
            div { class: "nav-links",
                if logged_in {
                    Link { to: Route::Dashboard {}, "Dashboard" }
                    button { class: "nav-btn", onclick: on_logout, "Logout" }
                } else {
                    Link { to: Route::Login {}, "Login" }
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
