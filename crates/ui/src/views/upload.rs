use std::path::Path;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Feedback, ViewError, ViewState, leave_on_error, view_state_from_resource};

/// Expected columns of the question sheet, in order.
const SHEET_COLUMNS: &str = "question, option_a, option_b, option_c, option_d, correct_ans";

#[component]
pub fn UploadView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let feedback = use_context::<Feedback>();
    let mut path = use_signal(String::new);

    let access = {
        let auth = ctx.auth();
        use_resource(move || {
            let auth = auth.clone();
            async move {
                let result = auth.require_admin().await.map(|_| ()).map_err(ViewError::from);
                if let Err(err) = &result {
                    leave_on_error(err, feedback, navigator);
                }
                result
            }
        })
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if feedback.is_loading() {
            return;
        }
        let upload = ctx.upload();
        let path = path();
        spawn(async move {
            let (file_name, bytes) = match read_sheet(&path).await {
                Ok(file) => file,
                Err(message) => {
                    feedback.error(message);
                    return;
                }
            };
            feedback.set_loading(true);
            let result = upload.upload(&file_name, bytes).await;
            feedback.set_loading(false);
            match result {
                Ok(message) => {
                    feedback.success(message);
                    navigator.push(Route::Dashboard {});
                }
                Err(err) => feedback.error(ViewError::from(err).message()),
            }
        });
    };

    let uploading = feedback.is_loading();
    let body = match view_state_from_resource(&access) {
        ViewState::Idle | ViewState::Loading => rsx! { p { "Checking access..." } },
        ViewState::Error(err) => rsx! { p { class: "error", "{err.message()}" } },
        ViewState::Ready(()) => rsx! {
            form { class: "upload-form", onsubmit: on_submit,
                label { r#for: "file", "Question sheet (.xlsx)" }
                input {
                    id: "file",
                    r#type: "text",
                    name: "file",
                    placeholder: "/path/to/questions.xlsx",
                    value: "{path}",
                    oninput: move |evt| path.set(evt.value()),
                }
                p { class: "hint", "Columns: {SHEET_COLUMNS}" }
                button { id: "uploadBtn", r#type: "submit", class: "btn", disabled: uploading,
                    if uploading { "Uploading..." } else { "Upload Questions" }
                }
            }
        },
    };

    rsx! {
        div { class: "page upload",
            h1 { "Upload Questions" }
            {body}
        }
    }
}

/// Read the picked file. An empty path yields no file, which the upload
/// service rejects with its own message.
async fn read_sheet(path: &str) -> Result<(String, Vec<u8>), String> {
    let path = path.trim();
    if path.is_empty() {
        return Ok((String::new(), Vec::new()));
    }
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| format!("Could not read {path}: {err}"))?;
    let file_name = Path::new(path)
        .file_name()
        .map_or_else(|| path.to_string(), |name| name.to_string_lossy().into_owned());
    Ok((file_name, bytes))
}
