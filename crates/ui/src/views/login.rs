use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Feedback, ViewError};

#[component]
pub fn LoginView() -> Element {
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
            match auth.login(&email, &password).await {
                Ok(_) => {
                    feedback.success("Login successful!");
                    navigator.push(Route::Dashboard {});
                }
                Err(err) => feedback.error(ViewError::from(err).message()),
            }
            pending.set(false);
        });
    };

    rsx! {
        div { class: "page auth-page",
            h2 { "Login" }
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
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button { r#type: "submit", class: "btn", disabled: pending(), "Login" }
            }
            p {
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
