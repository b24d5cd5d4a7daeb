//! Language model implementations.
//!
//! Implements `LanguageModel` for `openai_client::OpenAIClient`, which
//! covers OpenAI and OpenAI-compatible providers such as Groq.

mod openai;
