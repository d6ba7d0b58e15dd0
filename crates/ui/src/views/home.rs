use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page hero",
            h1 { "Welcome to Quiz App" }
            p { "Upload a question sheet, take a timed quiz and review every answer." }
            div { class: "hero-actions",
                Link { class: "btn", to: Route::Login {}, "Login" }
                Link { class: "btn secondary", to: Route::Register {}, "Register" }
            }
        }
    }
}
