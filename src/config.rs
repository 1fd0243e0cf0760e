use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_days: i64,
}

/// Which generative-language backend the AI proxy talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    Gemini,
    Claude,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    pub provider: AiProvider,
    pub model: String,
    pub api_key: String,
    /// Endpoint URL, only used by the Claude backend.
    pub api_url: Option<String>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub ai: AiConfig,
}

fn required(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set"))
}

impl AppConfig {
    /// Assemble configuration from the environment. Secrets and provider
    /// keys are mandatory; startup fails if any is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = required("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: required("JWT_SECRET")?,
            ttl_days: std::env::var("JWT_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(7),
        };
        let ai = AiConfig::from_env()?;
        Ok(Self {
            database_url,
            jwt,
            ai,
        })
    }
}

impl AiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let provider = match std::env::var("AI_PROVIDER")
            .unwrap_or_else(|_| "gemini".into())
            .to_lowercase()
            .as_str()
        {
            "gemini" => AiProvider::Gemini,
            "claude" => AiProvider::Claude,
            other => anyhow::bail!("unknown AI_PROVIDER {other:?} (expected gemini or claude)"),
        };

        let (model, api_key, api_url) = match provider {
            AiProvider::Gemini => (
                std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into()),
                required("GEMINI_API_KEY")?,
                None,
            ),
            AiProvider::Claude => (
                std::env::var("CLAUDE_MODEL").unwrap_or_else(|_| "claude-v1".into()),
                required("CLAUDE_API_KEY")?,
                Some(required("CLAUDE_API_URL")?),
            ),
        };

        let max_tokens = std::env::var("CLAUDE_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(300);

        Ok(Self {
            provider,
            model,
            api_key,
            api_url,
            max_tokens,
        })
    }
}
