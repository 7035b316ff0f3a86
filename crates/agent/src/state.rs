//! Shared application state.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AgentConfig;
use crate::openai::OpenAiClient;

/// Shared application state, cheap to clone into every handler.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AgentConfig,
    pool: SqlitePool,
    openai: OpenAiClient,
}

impl AppState {
    /// Build the state from the loaded configuration and an open pool.
    ///
    /// # Panics
    ///
    /// Panics if the configured API key contains invalid header characters.
    #[must_use]
    pub fn new(config: AgentConfig, pool: SqlitePool) -> Self {
        let openai = OpenAiClient::new(&config.openai);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                openai,
            }),
        }
    }

    /// Application configuration.
    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.inner.config
    }

    /// Demo database pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// `OpenAI` client used for the translation call.
    #[must_use]
    pub fn openai(&self) -> &OpenAiClient {
        &self.inner.openai
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone_send_sync() {
        fn assert_bounds<T: Clone + Send + Sync>() {}
        assert_bounds::<AppState>();
    }
}
