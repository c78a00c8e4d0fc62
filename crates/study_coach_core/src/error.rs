//! crates/study_coach_core/src/error.rs
//!
//! The error taxonomy for one generation stage of the study pipeline.

use crate::ports::PortError;

/// Why a generation stage could not produce model-authored content.
///
/// Every variant is recovered inside the orchestrator: a failure during the
/// flashcard stage discards all partial state and synthesizes the whole
/// result, a failure during the quiz stage synthesizes only the quiz. None of
/// them ever reach the caller of `generate_flashcards`.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// No usable completion credential was configured, so the remote call was
    /// skipped outright.
    #[error("no usable completion credential is configured")]
    Configuration,

    /// The completion request failed below the message boundary (network
    /// failure or non-success HTTP status).
    #[error("completion transport failed: {0}")]
    Transport(String),

    /// The completion succeeded but carried no message content.
    #[error("completion succeeded but returned no content")]
    EmptyResponse,

    /// No JSON payload could be recovered from the raw model text, or the
    /// recovered substring was not well-formed JSON.
    #[error("could not recover a JSON payload: {0}")]
    Parse(String),

    /// The payload parsed but failed a structural invariant.
    #[error("generated payload failed validation: {0}")]
    Validation(String),
}

impl From<PortError> for GenerationError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::Transport(msg) => GenerationError::Transport(msg),
            PortError::EmptyContent => GenerationError::EmptyResponse,
            PortError::Unexpected(msg) => GenerationError::Transport(msg),
        }
    }
}
