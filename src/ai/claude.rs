use anyhow::Context;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::ai::backend::LanguageModel;
use crate::config::AiConfig;

/// Claude-style completion backend. The endpoint URL comes from
/// configuration; deployments differ, so the reply is accepted with either
/// a `completion` or an `output` text field.
pub struct ClaudeBackend {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl ClaudeBackend {
    pub fn new(cfg: &AiConfig) -> anyhow::Result<Self> {
        let api_url = cfg
            .api_url
            .clone()
            .context("CLAUDE_API_URL must be set for the claude provider")?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_url,
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
            max_tokens: cfg.max_tokens,
        })
    }
}

#[async_trait]
impl LanguageModel for ClaudeBackend {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let body = json!({
            "model": self.model,
            "prompt": prompt,
            "max_tokens_to_sample": self.max_tokens,
        });

        let response = self
            .client
            .post(&self.api_url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
            .json(&body)
            .send()
            .await
            .context("send request to Claude")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Claude API error: {status} - {body}");
        }

        let parsed: Value = response.json().await.context("parse Claude response")?;
        let text = parsed
            .get("completion")
            .and_then(Value::as_str)
            .or_else(|| parsed.get("output").and_then(Value::as_str))
            .context("Claude response missing completion text")?
            .to_string();

        debug!(model = %self.model, chars = text.len(), "claude completion");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion_text(raw: &str) -> Option<String> {
        let parsed: Value = serde_json::from_str(raw).unwrap();
        parsed
            .get("completion")
            .and_then(Value::as_str)
            .or_else(|| parsed.get("output").and_then(Value::as_str))
            .map(str::to_string)
    }

    #[test]
    fn accepts_completion_field() {
        assert_eq!(
            completion_text(r#"{"completion":"a summary"}"#).as_deref(),
            Some("a summary")
        );
    }

    #[test]
    fn accepts_output_field() {
        assert_eq!(
            completion_text(r#"{"output":"a summary"}"#).as_deref(),
            Some("a summary")
        );
    }

    #[test]
    fn rejects_unknown_shape() {
        assert!(completion_text(r#"{"text":"a summary"}"#).is_none());
    }
}
