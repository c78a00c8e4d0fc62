//! crates/study_coach_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like the
//! OpenAI API or the host's speech engine.

use async_trait::async_trait;

use crate::prompts::PromptPair;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Completion succeeded but returned no content")]
    EmptyContent,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Sends one system/user prompt pair to the model and returns the raw text
    /// of the first choice. Implementations must report a non-success response
    /// as `Transport` and a success with no message content as `EmptyContent`.
    async fn complete(&self, prompts: &PromptPair) -> PortResult<String>;
}

pub trait VoiceInventory: Send + Sync {
    /// Locale tags of the speech voices currently installed on the host.
    /// Queried fresh on every catalog lookup since installed voices can change.
    fn installed_voice_tags(&self) -> Vec<String>;
}
