use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use reqwest::StatusCode;

use quiz_core::model::{
    AnswerSheet, Dashboard, DashboardStats, OptionLetter, Question, QuestionId, QuizResult,
    ReviewOptions, ReviewRecord, User, UserId,
};
use quiz_core::validation::Credentials;

use super::{QuestionUpload, QuizBackend};
use crate::error::ApiError;

/// In-memory backend for testing, prototyping and the offline demo.
///
/// Mirrors the server's observable behaviour: cookie-less login session,
/// admin-only uploads, and scoring of answered questions only.
#[derive(Clone, Default)]
pub struct StubBackend {
    state: Arc<Mutex<StubState>>,
}

#[derive(Default)]
struct StubState {
    questions: Vec<(Question, OptionLetter)>,
    users: HashMap<String, (String, User)>,
    session: Option<User>,
    offline: bool,
    submissions: Vec<AnswerSheet>,
    uploads: Vec<String>,
    attempts: HashMap<UserId, u32>,
}

impl StubBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub preloaded with the sample question bank and a demo admin.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let stub = Self::new();
        stub.add_user("admin@example.com", "admin123", true);
        stub.set_questions(sample_questions());
        stub
    }

    pub fn add_user(&self, email: &str, password: &str, is_admin: bool) -> User {
        let mut state = self.lock();
        let user = User {
            id: UserId::new(state.users.len() as u64 + 1),
            email: email.to_string(),
            is_admin,
        };
        state
            .users
            .insert(email.to_string(), (password.to_string(), user.clone()));
        user
    }

    /// Replace the question bank; each question carries its correct letter.
    pub fn set_questions(&self, questions: Vec<(Question, OptionLetter)>) {
        self.lock().questions = questions;
    }

    /// Make every call fail as if the network were down.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Log in without going through credentials.
    pub fn sign_in_as(&self, email: &str) {
        let mut state = self.lock();
        let user = state.users.get(email).map(|(_, user)| user.clone());
        state.session = user;
    }

    #[must_use]
    pub fn submissions(&self) -> Vec<AnswerSheet> {
        self.lock().submissions.clone()
    }

    #[must_use]
    pub fn uploads(&self) -> Vec<String> {
        self.lock().uploads.clone()
    }

    fn lock(&self) -> MutexGuard<'_, StubState> {
        // A poisoned lock only means a test panicked mid-call; the data is still usable.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn online(&self) -> Result<MutexGuard<'_, StubState>, ApiError> {
        let state = self.lock();
        if state.offline {
            return Err(ApiError::status(
                StatusCode::SERVICE_UNAVAILABLE,
                "Service unavailable",
            ));
        }
        Ok(state)
    }

    fn logged_in(&self) -> Result<(MutexGuard<'_, StubState>, User), ApiError> {
        let state = self.online()?;
        let user = state
            .session
            .clone()
            .ok_or_else(|| ApiError::status(StatusCode::UNAUTHORIZED, "Authentication required"))?;
        Ok((state, user))
    }
}

#[async_trait]
impl QuizBackend for StubBackend {
    async fn register(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let mut state = self.online()?;
        let email = credentials.email.trim();
        if email.is_empty() || credentials.password.is_empty() {
            return Err(ApiError::status(
                StatusCode::BAD_REQUEST,
                "Email and password required",
            ));
        }
        if state.users.contains_key(email) {
            return Err(ApiError::status(
                StatusCode::CONFLICT,
                "Email already registered",
            ));
        }
        let user = User {
            id: UserId::new(state.users.len() as u64 + 1),
            email: email.to_string(),
            is_admin: false,
        };
        state
            .users
            .insert(email.to_string(), (credentials.password.clone(), user));
        Ok("Registration successful".into())
    }

    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let mut state = self.online()?;
        let user = state
            .users
            .get(credentials.email.trim())
            .filter(|(password, _)| *password == credentials.password)
            .map(|(_, user)| user.clone())
            .ok_or_else(|| ApiError::status(StatusCode::UNAUTHORIZED, "Invalid credentials"))?;
        state.session = Some(user.clone());
        Ok(user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let (mut state, _) = self.logged_in()?;
        state.session = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        let (_state, user) = self.logged_in()?;
        Ok(user)
    }

    async fn upload_questions(&self, upload: &QuestionUpload) -> Result<String, ApiError> {
        let (mut state, user) = self.logged_in()?;
        if !user.is_admin {
            return Err(ApiError::status(
                StatusCode::FORBIDDEN,
                "Admin access required",
            ));
        }
        if upload.bytes.is_empty() {
            return Err(ApiError::status(StatusCode::BAD_REQUEST, "No file uploaded"));
        }
        state.uploads.push(upload.file_name.clone());
        Ok("Questions uploaded successfully".into())
    }

    async fn questions(&self) -> Result<Vec<Question>, ApiError> {
        let (state, _) = self.logged_in()?;
        Ok(state.questions.iter().map(|(q, _)| q.clone()).collect())
    }

    async fn question_count(&self) -> Result<u32, ApiError> {
        let (state, _) = self.logged_in()?;
        Ok(u32::try_from(state.questions.len()).unwrap_or(u32::MAX))
    }

    async fn submit_quiz(&self, answers: &AnswerSheet) -> Result<QuizResult, ApiError> {
        let (mut state, user) = self.logged_in()?;
        let mut score = 0_u32;
        let mut results = Vec::with_capacity(answers.len());
        for (id, selected) in answers.iter() {
            let (question, correct) = state
                .questions
                .iter()
                .find(|(q, _)| q.id() == id)
                .ok_or_else(|| {
                    ApiError::status(StatusCode::INTERNAL_SERVER_ERROR, "Unknown question")
                })?;
            let is_correct = *correct == selected;
            if is_correct {
                score += 1;
            }
            results.push(ReviewRecord {
                question: question.question.clone(),
                options: ReviewOptions {
                    a: question.option_a.clone(),
                    b: question.option_b.clone(),
                    c: question.option_c.clone(),
                    d: question.option_d.clone(),
                },
                selected,
                correct: *correct,
                is_correct,
            });
        }
        let total = u32::try_from(state.questions.len()).unwrap_or(u32::MAX);
        let percentage = if total > 0 {
            (f64::from(score) / f64::from(total) * 10_000.0).round() / 100.0
        } else {
            0.0
        };
        state.submissions.push(answers.clone());
        *state.attempts.entry(user.id).or_default() += 1;
        Ok(QuizResult {
            score,
            total,
            percentage,
            results,
        })
    }

    async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        let (state, user) = self.logged_in()?;
        let stats = DashboardStats {
            question_count: u32::try_from(state.questions.len()).unwrap_or(u32::MAX),
            quiz_attempts: state.attempts.get(&user.id).copied().unwrap_or_default(),
        };
        Ok(Dashboard { user, stats })
    }
}

fn sample_questions() -> Vec<(Question, OptionLetter)> {
    let rows = [
        (
            "What is the default port number for Flask development server?",
            ["5000", "8000", "3000", "80"],
            OptionLetter::A,
        ),
        (
            "Which AWS service is used for serverless computing?",
            ["EC2", "Lambda", "ECS", "Fargate"],
            OptionLetter::B,
        ),
        (
            "What decorator is used to define a route in Flask?",
            ["@route", "@app.route", "@flask.route", "@web.route"],
            OptionLetter::B,
        ),
        (
            "Which AWS service provides scalable object storage?",
            ["RDS", "S3", "DynamoDB", "CloudFront"],
            OptionLetter::B,
        ),
        (
            "What method is used to get form data in Flask?",
            ["request.form", "request.get", "request.data", "request.json"],
            OptionLetter::A,
        ),
    ];

    rows.into_iter()
        .zip(1_u64..)
        .map(|((prompt, [a, b, c, d], correct), id)| {
            (
                Question {
                    id: QuestionId::new(id),
                    question: prompt.to_string(),
                    option_a: a.to_string(),
                    option_b: b.to_string(),
                    option_c: c.to_string(),
                    option_d: d.to_string(),
                },
                correct,
            )
        })
        .collect()
}
