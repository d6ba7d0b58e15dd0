use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quiz_core::Clock;
use quiz_core::model::QuizResult;
use storage::repository::LocalStore;

use crate::error::CacheError;

/// Local storage key holding the most recent quiz result.
pub const LAST_RESULT_KEY: &str = "quizResults";
pub const CACHE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CachedEnvelope {
    version: u32,
    saved_at: DateTime<Utc>,
    result: QuizResult,
}

/// What the answer review page finds in local storage.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedResult {
    Missing,
    /// Something is stored but it cannot be shown: unreadable or written by
    /// another cache version.
    Stale,
    Present {
        saved_at: DateTime<Utc>,
        result: QuizResult,
    },
}

impl CachedResult {
    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        match self {
            Self::Present { result, .. } => Some(result),
            Self::Missing | Self::Stale => None,
        }
    }
}

/// Last submitted result, kept for the answer review page.
#[derive(Clone)]
pub struct ResultCache {
    clock: Clock,
    store: Arc<dyn LocalStore>,
}

impl ResultCache {
    #[must_use]
    pub fn new(clock: Clock, store: Arc<dyn LocalStore>) -> Self {
        Self { clock, store }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(
            clock,
            Arc::new(storage::repository::InMemoryRepository::new()),
        )
    }

    /// Replace the cached result.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if encoding or the store write fails.
    pub async fn save(&self, result: &QuizResult) -> Result<(), CacheError> {
        let envelope = CachedEnvelope {
            version: CACHE_VERSION,
            saved_at: self.clock.now(),
            result: result.clone(),
        };
        let payload = serde_json::to_string(&envelope)?;
        self.store.set_item(LAST_RESULT_KEY, &payload).await?;
        Ok(())
    }

    /// Read the cached result. Bad payloads come back as `Stale`.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Storage` if the store cannot be read.
    pub async fn load(&self) -> Result<CachedResult, CacheError> {
        let Some(payload) = self.store.get_item(LAST_RESULT_KEY).await? else {
            return Ok(CachedResult::Missing);
        };
        match serde_json::from_str::<CachedEnvelope>(&payload) {
            Ok(envelope) if envelope.version == CACHE_VERSION => Ok(CachedResult::Present {
                saved_at: envelope.saved_at,
                result: envelope.result,
            }),
            Ok(envelope) => {
                log::warn!(
                    "ignoring cached quiz result with version {}",
                    envelope.version
                );
                Ok(CachedResult::Stale)
            }
            Err(err) => {
                log::warn!("ignoring unreadable cached quiz result: {err}");
                Ok(CachedResult::Stale)
            }
        }
    }

    /// # Errors
    ///
    /// Returns `CacheError::Storage` if the store write fails.
    pub async fn clear(&self) -> Result<(), CacheError> {
        self.store.remove_item(LAST_RESULT_KEY).await?;
        Ok(())
    }
}
