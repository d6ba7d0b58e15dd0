use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Feedback, ViewError};

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let feedback = use_context::<Feedback>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut pending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        pending.set(true);
        let auth = ctx.auth();
        let (email, password) = (email(), password());
        spawn(async move {
            match auth.register(&email, &password).await {
                Ok(message) => {
                    feedback.success(format!("{message}! Please login."));
                    navigator.push(Route::Login {});
                }
                Err(err) => feedback.error(ViewError::from(err).message()),
            }
            pending.set(false);
        });
    };

    rsx! {
        div { class: "page auth-page",
            h2 { "Register" }
            form { class: "auth-form", onsubmit: on_submit,
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    name: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    name: "password",
                    placeholder: "At least 6 characters",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button { r#type: "submit", class: "btn", disabled: pending(), "Register" }
            }
            p {
                "Already registered? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
