use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::api::{ApiConfig, HttpBackend, QuizBackend};
use crate::auth_service::AuthService;
use crate::error::AppServicesError;
use crate::quiz::QuizFlowService;
use crate::result_cache::ResultCache;
use crate::upload_service::UploadService;

/// Assembles app-facing services over one backend and one local store.
#[derive(Clone)]
pub struct AppServices {
    auth: Arc<AuthService>,
    upload: Arc<UploadService>,
    quiz_flow: Arc<QuizFlowService>,
    results: Arc<ResultCache>,
}

impl AppServices {
    #[must_use]
    pub fn new(backend: Arc<dyn QuizBackend>, storage: &Storage, clock: Clock) -> Self {
        let results = ResultCache::new(clock, Arc::clone(&storage.local));
        Self {
            auth: Arc::new(AuthService::new(Arc::clone(&backend))),
            upload: Arc::new(UploadService::new(Arc::clone(&backend))),
            quiz_flow: Arc::new(QuizFlowService::new(backend, results.clone())),
            results: Arc::new(results),
        }
    }

    /// Build services talking HTTP to `config.base_url`, with the result cache in `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or the HTTP client setup fails.
    pub async fn new_http(
        config: ApiConfig,
        db_url: &str,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        log::info!("using backend at {}", config.base_url);
        let backend: Arc<dyn QuizBackend> = Arc::new(HttpBackend::new(config)?);
        Ok(Self::new(backend, &storage, clock))
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn upload(&self) -> Arc<UploadService> {
        Arc::clone(&self.upload)
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultCache> {
        Arc::clone(&self.results)
    }
}
