//! Backend contract consumed by the client.

mod http;
mod stub;

use async_trait::async_trait;

use quiz_core::model::{AnswerSheet, Dashboard, Question, QuizResult, User};
use quiz_core::validation::Credentials;

use crate::error::ApiError;

pub use http::{ApiConfig, HttpBackend};
pub use stub::StubBackend;

/// A question spreadsheet picked by the user for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl QuestionUpload {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// REST endpoints of the quiz backend.
///
/// The login session is held by the implementation (a cookie jar for HTTP);
/// callers never see it.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// `POST /api/register`. Returns the backend's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn register(&self, credentials: &Credentials) -> Result<String, ApiError>;

    /// `POST /api/login`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or rejected credentials.
    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError>;

    /// `POST /api/logout`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `GET /api/user`, used as the login check.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when no user is logged in or the call fails.
    async fn current_user(&self) -> Result<User, ApiError>;

    /// `POST /api/upload` as multipart field `file`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or when the backend rejects the file.
    async fn upload_questions(&self, upload: &QuestionUpload) -> Result<String, ApiError>;

    /// `GET /api/questions`, in quiz order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn questions(&self) -> Result<Vec<Question>, ApiError>;

    /// `GET /api/questions/count`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn question_count(&self) -> Result<u32, ApiError>;

    /// `POST /api/quiz/submit`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn submit_quiz(&self, answers: &AnswerSheet) -> Result<QuizResult, ApiError>;

    /// `GET /api/dashboard`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn dashboard(&self) -> Result<Dashboard, ApiError>;
}
