use dioxus::prelude::*;

use services::QuizError;

use crate::routes::Route;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    AuthRequired,
    AdminRequired,
    NoQuestions,
    Invalid(Vec<String>),
    /// Message from the backend or the transport, shown as-is.
    Backend(String),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AuthRequired => "Please log in to continue.".into(),
            Self::AdminRequired => "Admin access required to upload questions".into(),
            Self::NoQuestions => "No questions available. Please upload questions first.".into(),
            Self::Invalid(messages) => messages.join("\n"),
            Self::Backend(message) => message.clone(),
            Self::Unknown => "Something went wrong. Please try again.".into(),
        }
    }

    /// Where the user is sent when this error blocks a page.
    #[must_use]
    pub fn destination(&self) -> Option<Route> {
        match self {
            Self::AuthRequired => Some(Route::Login {}),
            Self::AdminRequired => Some(Route::Dashboard {}),
            Self::NoQuestions => Some(Route::Upload {}),
            Self::Invalid(_) | Self::Backend(_) | Self::Unknown => None,
        }
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::AuthRequired => Self::AuthRequired,
            QuizError::AdminRequired => Self::AdminRequired,
            QuizError::EmptyQuestionSet => Self::NoQuestions,
            QuizError::Validation(errors) => Self::Invalid(errors.messages().to_vec()),
            QuizError::Api(err) => Self::Backend(err.to_string()),
            other => {
                log::warn!("unexpected quiz error: {other}");
                Self::Unknown
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::validation::ValidationErrors;
    use services::SessionError;

    use super::*;

    #[test]
    fn gate_errors_redirect() {
        assert_eq!(
            ViewError::from(QuizError::EmptyQuestionSet).destination(),
            Some(Route::Upload {})
        );
        assert_eq!(
            ViewError::from(QuizError::AuthRequired).destination(),
            Some(Route::Login {})
        );
        assert_eq!(
            ViewError::from(QuizError::AdminRequired).destination(),
            Some(Route::Dashboard {})
        );
    }

    #[test]
    fn validation_messages_are_kept() {
        let err = ViewError::from(QuizError::Validation(ValidationErrors::single(
            "Please select a file",
        )));
        assert_eq!(err.message(), "Please select a file");
        assert_eq!(err.destination(), None);
    }

    #[test]
    fn session_errors_are_unknown() {
        let err = ViewError::from(QuizError::from(SessionError::Finished));
        assert_eq!(err, ViewError::Unknown);
    }
}
