//! Language-generation capability.

use async_trait::async_trait;

use crate::error::Result;

/// A single-turn, prompt-driven completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier understood by the provider
    pub model: String,

    /// System instruction
    pub system: String,

    /// User content
    pub user: String,

    pub temperature: f32,

    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Deterministic request (temperature 0).
    pub fn new(
        model: impl Into<String>,
        system: impl Into<String>,
        user: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            model: model.into(),
            system: system.into(),
            user: user.into(),
            temperature: 0.0,
            max_tokens,
        }
    }
}

/// Language-generation trait.
///
/// Implementations wrap a specific provider and return the raw text of the
/// first completion. Parsing is the caller's job.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
