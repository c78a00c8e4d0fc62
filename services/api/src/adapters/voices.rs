//! services/api/src/adapters/voices.rs
//!
//! This module contains the adapter for the host speech voice inventory.
//! It implements the `VoiceInventory` port from the `core` crate.
//!
//! The API service has no direct view of the client's speech engine, so the
//! inventory is supplied through configuration at startup. The language
//! catalog still re-filters against it on every call.

use study_coach_core::ports::VoiceInventory;

/// An adapter that serves the voice-tag list from configuration.
#[derive(Clone)]
pub struct ConfiguredVoiceInventory {
    tags: Vec<String>,
}

impl ConfiguredVoiceInventory {
    /// Creates a new `ConfiguredVoiceInventory`.
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }
}

impl VoiceInventory for ConfiguredVoiceInventory {
    fn installed_voice_tags(&self) -> Vec<String> {
        self.tags.clone()
    }
}
