use std::sync::Arc;

use quiz_core::validation::ValidationErrors;

use crate::api::{QuestionUpload, QuizBackend};
use crate::error::QuizError;

pub const MISSING_FILE_MESSAGE: &str = "Please select a file";

/// Sends question spreadsheets to the backend. Parsing happens server-side.
#[derive(Clone)]
pub struct UploadService {
    backend: Arc<dyn QuizBackend>,
}

impl UploadService {
    #[must_use]
    pub fn new(backend: Arc<dyn QuizBackend>) -> Self {
        Self { backend }
    }

    /// # Errors
    ///
    /// Returns `QuizError::Validation` when no file was picked, and
    /// `QuizError::Api` if the backend rejects the upload.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, QuizError> {
        if file_name.trim().is_empty() || bytes.is_empty() {
            return Err(ValidationErrors::single(MISSING_FILE_MESSAGE).into());
        }
        let upload = QuestionUpload::new(file_name, bytes);
        let message = self.backend.upload_questions(&upload).await?;
        log::info!("uploaded question file {file_name}");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::StubBackend;

    use super::*;

    #[tokio::test]
    async fn missing_file_is_rejected_locally() {
        let stub = StubBackend::new();
        let service = UploadService::new(Arc::new(stub.clone()));

        let err = service.upload("", Vec::new()).await.unwrap_err();
        assert_eq!(err.to_string(), MISSING_FILE_MESSAGE);
        assert!(stub.uploads().is_empty());
    }

    #[tokio::test]
    async fn admin_upload_reaches_backend() {
        let stub = StubBackend::new();
        stub.add_user("admin@example.com", "admin123", true);
        stub.sign_in_as("admin@example.com");
        let service = UploadService::new(Arc::new(stub.clone()));

        let message = service
            .upload("questions.xlsx", b"PK\x03\x04".to_vec())
            .await
            .unwrap();
        assert_eq!(message, "Questions uploaded successfully");
        assert_eq!(stub.uploads(), ["questions.xlsx"]);
    }
}
