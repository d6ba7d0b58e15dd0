#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_service;
pub mod error;
pub mod quiz;
pub mod result_cache;
pub mod upload_service;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use error::{ApiError, AppServicesError, CacheError, QuizError, SessionError};
pub use quiz::{QuizController, QuizFlowService, TimerMode};
pub use result_cache::{CachedResult, ResultCache};
pub use upload_service::UploadService;
