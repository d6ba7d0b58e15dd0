use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use quiz_core::model::{AnswerSheet, Dashboard, Question, QuizResult, User};
use quiz_core::validation::Credentials;

use super::{QuestionUpload, QuizBackend};
use crate::error::{ApiError, FALLBACK_API_MESSAGE};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read `QUIZ_API_URL` and `QUIZ_HTTP_TIMEOUT_SECS`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZ_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let timeout = env::var("QUIZ_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS), Duration::from_secs);
        Self { base_url, timeout }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url.trim_end_matches('/'))
    }
}

/// `QuizBackend` over HTTP with a cookie jar holding the login session.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("quiz-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        log::debug!("POST {url}");
        let response = self.client.post(url).json(body).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| FALLBACK_API_MESSAGE.to_string());
        log::warn!("backend returned {status}: {message}");
        return Err(ApiError::Status { status, message });
    }
    Ok(response.json::<T>().await?)
}

#[async_trait]
impl QuizBackend for HttpBackend {
    async fn register(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let body: MessageBody = self
            .post("/register", &CredentialsBody::from(credentials))
            .await?;
        Ok(body.message.unwrap_or_default())
    }

    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let body: UserBody = self
            .post("/login", &CredentialsBody::from(credentials))
            .await?;
        Ok(body.user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let _: MessageBody = self.post("/logout", &serde_json::json!({})).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        let body: UserBody = self.get("/user").await?;
        Ok(body.user)
    }

    async fn upload_questions(&self, upload: &QuestionUpload) -> Result<String, ApiError> {
        let url = self.config.endpoint("/upload");
        log::debug!("POST {url} ({} bytes)", upload.bytes.len());
        let part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        let form = Form::new().part("file", part);
        let response = self.client.post(url).multipart(form).send().await?;
        let body: MessageBody = read_json(response).await?;
        Ok(body.message.unwrap_or_default())
    }

    async fn questions(&self) -> Result<Vec<Question>, ApiError> {
        let body: QuestionsBody = self.get("/questions").await?;
        Ok(body.questions)
    }

    async fn question_count(&self) -> Result<u32, ApiError> {
        let body: CountBody = self.get("/questions/count").await?;
        Ok(body.count)
    }

    async fn submit_quiz(&self, answers: &AnswerSheet) -> Result<QuizResult, ApiError> {
        self.post("/quiz/submit", &SubmitBody { answers }).await
    }

    async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        self.get("/dashboard").await
    }
}

#[derive(Debug, Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a Credentials> for CredentialsBody<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: credentials.email.trim(),
            password: &credentials.password,
        }
    }
}

#[derive(Debug, Serialize)]
struct SubmitBody<'a> {
    answers: &'a AnswerSheet,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    user: User,
}

#[derive(Debug, Deserialize)]
struct QuestionsBody {
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct CountBody {
    count: u32,
}
