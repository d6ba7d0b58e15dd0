use std::sync::Arc;

use quiz_core::model::{AnswerSheet, QuizOverview, ResultSummary};

use super::controller::{QuizController, TimerMode};
use crate::api::QuizBackend;
use crate::error::QuizError;
use crate::result_cache::ResultCache;

/// Orchestrates the quiz gate, session start and submission.
#[derive(Clone)]
pub struct QuizFlowService {
    backend: Arc<dyn QuizBackend>,
    results: ResultCache,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(backend: Arc<dyn QuizBackend>, results: ResultCache) -> Self {
        Self { backend, results }
    }

    #[must_use]
    pub fn results(&self) -> &ResultCache {
        &self.results
    }

    /// Figures for the confirmation page.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestionSet` when nothing has been uploaded yet,
    /// or `QuizError::Api` if the backend call fails.
    pub async fn overview(&self) -> Result<QuizOverview, QuizError> {
        let count = self.backend.question_count().await?;
        if count == 0 {
            return Err(QuizError::EmptyQuestionSet);
        }
        Ok(QuizOverview::new(count))
    }

    /// Load the question bank and start an attempt on its first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestionSet` when the bank is empty, without
    /// fetching questions, or `QuizError::Api` on backend failures.
    pub async fn start(&self, mode: TimerMode) -> Result<QuizController, QuizError> {
        let count = self.backend.question_count().await?;
        if count == 0 {
            return Err(QuizError::EmptyQuestionSet);
        }
        let questions = self.backend.questions().await?;
        log::info!("starting quiz with {} questions", questions.len());
        Ok(QuizController::start(questions, mode)?)
    }

    /// Send answers for scoring and remember the full result for review.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Api` if the backend rejects or cannot receive the answers.
    pub async fn submit_answers(&self, answers: &AnswerSheet) -> Result<ResultSummary, QuizError> {
        let result = self.backend.submit_quiz(answers).await?;
        if let Err(err) = self.results.save(&result).await {
            log::warn!("failed to cache quiz result: {err}");
        }
        let summary = result.summary();
        log::info!(
            "quiz submitted: {}/{} ({:.2}%)",
            summary.score,
            summary.total,
            summary.percentage
        );
        Ok(summary)
    }

    /// Submit the controller's answers, leaving it submitted on success or back
    /// on its current question on failure.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if a submission is already running, the
    /// quit prompt is open or the attempt has ended, and `QuizError::Api` on
    /// backend failures.
    pub async fn submit(&self, session: &mut QuizController) -> Result<ResultSummary, QuizError> {
        let answers = session.begin_submit()?;
        let outcome = self.submit_answers(&answers).await;
        Self::settle_submission(session, outcome)
    }

    /// Apply the outcome of `submit_answers` to a session that `begin_submit`
    /// put into `Submitting`. Callers that cannot hold the session across the
    /// network call use this after `begin_submit` and `submit_answers`.
    ///
    /// # Errors
    ///
    /// Passes through the error of a failed `outcome`.
    pub fn settle_submission(
        session: &mut QuizController,
        outcome: Result<ResultSummary, QuizError>,
    ) -> Result<ResultSummary, QuizError> {
        match outcome {
            Ok(summary) => {
                session.complete_submission();
                Ok(summary)
            }
            Err(err) => {
                log::warn!("quiz submission failed: {err}");
                session.submission_failed();
                Err(err)
            }
        }
    }
}
