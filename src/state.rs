use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::config::Config;
use crate::error::Result;
use crate::llm::CompletionClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    completion: Arc<OnceCell<CompletionClient>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config, completion: Arc::new(OnceCell::new()) }
    }

    /// Shared completion client, built on first use. A failed build (missing
    /// credential) is not cached, so a later call retries.
    pub async fn completion_client(&self) -> Result<&CompletionClient> {
        self.completion
            .get_or_try_init(|| async { CompletionClient::from_config(&self.config) })
            .await
    }
}
