//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use std::sync::Arc;
use study_coach_core::StudyMaterialService;

/// The shared application state, created once at startup and passed to all handlers.
///
/// The study service holds no per-call state, so concurrent requests proceed
/// fully independently.
#[derive(Clone)]
pub struct AppState {
    pub study: Arc<StudyMaterialService>,
    pub config: Arc<Config>,
}
