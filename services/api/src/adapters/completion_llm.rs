//! services/api/src/adapters/completion_llm.rs
//!
//! This module contains the adapter for the study material completion LLM.
//! It implements the `CompletionService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    error::OpenAIError,
    Client,
};
use async_trait::async_trait;
use study_coach_core::{
    ports::{CompletionService, PortError, PortResult},
    prompts::PromptPair,
};

/// Sampling temperature for generation requests.
const TEMPERATURE: f32 = 0.7;

/// Generation ceiling; a full flashcard or quiz payload fits comfortably.
const MAX_TOKENS: u32 = 2000;

/// Mild penalties to keep six generated items from repeating each other.
const PRESENCE_PENALTY: f32 = 0.1;
const FREQUENCY_PENALTY: f32 = 0.1;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `CompletionService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiCompletionAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletionAdapter {
    /// Creates a new `OpenAiCompletionAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }
}

//=========================================================================================
// `CompletionService` Trait Implementation
//=========================================================================================

#[async_trait]
impl CompletionService for OpenAiCompletionAdapter {
    /// Sends one system/user prompt pair and returns the raw text of the
    /// first choice.
    async fn complete(&self, prompts: &PromptPair) -> PortResult<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(prompts.system.as_str())
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompts.user.as_str())
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .presence_penalty(PRESENCE_PENALTY)
            .frequency_penalty(FREQUENCY_PENALTY)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Transport(e.to_string()))?;

        // Extract the text content from the first choice in the response.
        // A success status with nothing to parse is reported distinctly so the
        // orchestrator can log it as an empty response rather than a failure
        // of the transport.
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(PortError::EmptyContent)
    }
}
