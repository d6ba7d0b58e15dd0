//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::validation::ValidationErrors;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Message shown when the backend rejects a call without explaining why.
pub const FALLBACK_API_MESSAGE: &str = "API call failed";

/// Errors emitted by backend calls.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend answered with a non-success status and an error message.
    #[error("{message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    #[must_use]
    pub fn status(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == reqwest::StatusCode::UNAUTHORIZED,
            Self::Http(err) => err.status() == Some(reqwest::StatusCode::UNAUTHORIZED),
        }
    }
}

/// Errors emitted by the quiz session controller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available")]
    EmptyQuestionSet,
    #[error("submission already in progress")]
    SubmissionInFlight,
    #[error("quit confirmation is open")]
    QuitPending,
    #[error("quiz session has ended")]
    Finished,
}

/// Errors emitted by the result cache.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CacheError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Encode(#[from] serde_json::Error),
}

/// Failures surfaced to the user by auth, upload and quiz flows.
///
/// Every variant leaves in-memory session state intact; the UI decides
/// where to send the user.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("please log in to continue")]
    AuthRequired,
    #[error("admin access required to upload questions")]
    AdminRequired,
    #[error("no questions available, please upload questions first")]
    EmptyQuestionSet,
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Network or server failure; the action may be retried by the user.
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(SessionError),
}

impl From<SessionError> for QuizError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::EmptyQuestionSet => Self::EmptyQuestionSet,
            other => Self::Session(other),
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_maps_to_empty_question_set() {
        let err = QuizError::from(SessionError::EmptyQuestionSet);
        assert!(matches!(err, QuizError::EmptyQuestionSet));

        let err = QuizError::from(SessionError::SubmissionInFlight);
        assert!(matches!(
            err,
            QuizError::Session(SessionError::SubmissionInFlight)
        ));
    }

    #[test]
    fn status_error_displays_backend_message() {
        let err = ApiError::status(reqwest::StatusCode::UNAUTHORIZED, "Invalid credentials");
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_unauthorized());
    }
}
