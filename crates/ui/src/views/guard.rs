use dioxus_router::Navigator;

use super::{Feedback, ViewError};

/// Report an error that stops a page from loading and leave for the page that
/// can fix it, if there is one.
pub fn leave_on_error(err: &ViewError, feedback: Feedback, navigator: Navigator) {
    if *err != ViewError::AuthRequired {
        feedback.error(err.message());
    }
    if let Some(destination) = err.destination() {
        navigator.replace(destination);
    }
}
