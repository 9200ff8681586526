use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::assistant::{AdviceService, CannedAdvisor, LlmAdvisor};
use crate::config::Config;
use crate::llm_client::{self, LlmClient};
use crate::storage::Storage;
use crate::sync::{notion, NoopSync, NotionSync, WorkspaceSync};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    /// Advice backend. Canned replies unless an OpenAI key is configured.
    pub advisor: Arc<dyn AdviceService>,
    /// Workspace mirror. No-op unless a Notion key is configured.
    pub sync: Arc<dyn WorkspaceSync>,
    pub config: Config,
}

impl AppState {
    /// Wires the integrations the configuration asks for around `storage`.
    pub fn from_config(config: Config, storage: Arc<dyn Storage>) -> Result<Self> {
        let advisor = select_advisor(&config)?;
        let sync = select_sync(&config)?;
        info!(
            "Integrations: advisor={}, workspace_sync={}",
            advisor.backend(),
            if sync.is_configured() { "notion" } else { "disabled" }
        );
        Ok(Self {
            storage,
            advisor,
            sync,
            config,
        })
    }
}

fn select_advisor(config: &Config) -> Result<Arc<dyn AdviceService>> {
    match &config.openai_api_key {
        Some(key) => {
            let client = LlmClient::new(
                key.clone(),
                llm_client::DEFAULT_API_BASE,
                config.openai_model.clone(),
                config.http_timeout,
            )
            .context("Failed to build LLM HTTP client")?;
            info!("LLM client initialized (model: {})", client.model());
            Ok(Arc::new(LlmAdvisor(client)))
        }
        None => Ok(Arc::new(CannedAdvisor)),
    }
}

fn select_sync(config: &Config) -> Result<Arc<dyn WorkspaceSync>> {
    match &config.notion_api_key {
        Some(key) => {
            let sync = NotionSync::new(
                key.clone(),
                config.notion_database_id.clone(),
                notion::DEFAULT_API_BASE,
                config.http_timeout,
            )
            .context("Failed to build Notion HTTP client")?;
            Ok(Arc::new(sync))
        }
        None => Ok(Arc::new(NoopSync)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    #[test]
    fn test_unconfigured_selects_offline_backends() {
        let state = AppState::from_config(Config::default(), Arc::new(MemStorage::new())).unwrap();
        assert_eq!(state.advisor.backend(), "canned");
        assert!(!state.sync.is_configured());
    }

    #[test]
    fn test_keys_select_live_backends() {
        let config = Config {
            openai_api_key: Some("sk-test".to_string()),
            notion_api_key: Some("secret_test".to_string()),
            notion_database_id: "db".to_string(),
            ..Config::default()
        };
        let state = AppState::from_config(config, Arc::new(MemStorage::new())).unwrap();
        assert_eq!(state.advisor.backend(), "llm");
        assert!(state.sync.is_configured());
    }
}
