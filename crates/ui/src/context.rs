use std::sync::Arc;

use services::{AuthService, QuizFlowService, ResultCache, UploadService};

pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn upload(&self) -> Arc<UploadService>;
    fn quiz_flow(&self) -> Arc<QuizFlowService>;
    fn results(&self) -> Arc<ResultCache>;
}

impl UiApp for services::AppServices {
    fn auth(&self) -> Arc<AuthService> {
        services::AppServices::auth(self)
    }

    fn upload(&self) -> Arc<UploadService> {
        services::AppServices::upload(self)
    }

    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        services::AppServices::quiz_flow(self)
    }

    fn results(&self) -> Arc<ResultCache> {
        services::AppServices::results(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    upload: Arc<UploadService>,
    quiz_flow: Arc<QuizFlowService>,
    results: Arc<ResultCache>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            upload: app.upload(),
            quiz_flow: app.quiz_flow(),
            results: app.results(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
