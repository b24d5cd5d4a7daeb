//! `LanguageModel` for any OpenAI-compatible chat endpoint.
//!
//! ```rust,ignore
//! let llm = OpenAIClient::new(groq_key).with_base_url("https://api.groq.com/openai/v1");
//! let pipeline = Pipeline::new(Arc::new(llm), searcher, PipelineConfig::default());
//! ```

use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError};

use crate::error::{ErrorKind, FactCheckError, Result};
use crate::traits::llm::{CompletionRequest, LanguageModel};

impl From<OpenAIError> for FactCheckError {
    fn from(e: OpenAIError) -> Self {
        let kind = if e.is_retryable() {
            ErrorKind::Retryable
        } else {
            ErrorKind::NonRetryable
        };
        FactCheckError::llm(e, kind)
    }
}

fn chat_request(request: CompletionRequest) -> ChatRequest {
    ChatRequest::new(request.model)
        .message(Message::system(request.system))
        .message(Message::user(request.user))
        .temperature(request.temperature)
        .max_tokens(request.max_tokens)
}

#[async_trait]
impl LanguageModel for OpenAIClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let response = self.chat_completion(chat_request(request)).await?;
        Ok(response.content)
    }
}
