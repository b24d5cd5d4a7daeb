use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use factcheck::{PipelineConfig, SecretString};
use std::env;
use std::num::NonZeroU32;

/// Groq's OpenAI-compatible endpoint.
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: SecretString,
    pub tavily_api_key: SecretString,
    pub llm_base_url: String,
    pub extraction_model: Option<String>,
    pub classification_model: Option<String>,
    pub max_concurrency: Option<usize>,
    pub search_rps: Option<NonZeroU32>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let groq_api_key = required(&var, "GROQ_API_KEY")?;
        let tavily_api_key = required(&var, "TAVILY_API_KEY")?;

        Ok(Self {
            groq_api_key,
            tavily_api_key,
            llm_base_url: var("LLM_BASE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            extraction_model: var("FACTCHECK_EXTRACTION_MODEL"),
            classification_model: var("FACTCHECK_CLASSIFICATION_MODEL"),
            max_concurrency: var("FACTCHECK_MAX_CONCURRENCY")
                .map(|v| v.trim().parse())
                .transpose()
                .context("FACTCHECK_MAX_CONCURRENCY must be a valid number")?,
            search_rps: var("FACTCHECK_SEARCH_RPS")
                .map(|v| v.trim().parse())
                .transpose()
                .context("FACTCHECK_SEARCH_RPS must be a positive number")?,
        })
    }

    /// Pipeline settings with environment overrides applied.
    pub fn pipeline_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::default();
        if let Some(model) = &self.extraction_model {
            config = config.with_extraction_model(model);
        }
        if let Some(model) = &self.classification_model {
            config = config.with_classification_model(model);
        }
        if let Some(n) = self.max_concurrency {
            config = config.with_max_concurrency(n);
        }
        config
    }
}

fn required(var: &impl Fn(&str) -> Option<String>, name: &str) -> Result<SecretString> {
    let value = SecretString::new(var(name).with_context(|| format!("{} must be set", name))?);
    if value.is_blank() {
        bail!("{} must not be empty", name);
    }
    Ok(value)
}
