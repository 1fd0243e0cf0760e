use std::sync::Arc;

use async_trait::async_trait;

use crate::ai::claude::ClaudeBackend;
use crate::ai::gemini::GeminiBackend;
use crate::config::{AiConfig, AiProvider};

/// A configured generative-language backend. One implementation is selected
/// at startup; handlers depend only on this capability.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send a single prompt and return the backend's free-text reply.
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

pub fn from_config(cfg: &AiConfig) -> anyhow::Result<Arc<dyn LanguageModel>> {
    Ok(match cfg.provider {
        AiProvider::Gemini => Arc::new(GeminiBackend::new(cfg)),
        AiProvider::Claude => Arc::new(ClaudeBackend::new(cfg)?),
    })
}
