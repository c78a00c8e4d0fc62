//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints consumed by the UI
//! layer. The generation endpoint mirrors the pipeline's contract: it never
//! fails once a non-empty topic has been accepted.

use crate::web::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use study_coach_core::domain::{LanguageDescriptor, OfflineQuizQuestion};
use tracing::info;

//=========================================================================================
// API Request and Response Payloads
//=========================================================================================

/// The request payload for study material generation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStudyMaterialRequest {
    pub topic: String,
    pub source_content: Option<String>,
}

/// The request payload for speech-ready summary text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSummaryRequest {
    pub text: String,
    pub language: String,
}

/// The response payload carrying the enhanced speech text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSummaryResponse {
    pub audio_text: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Generate a complete study bundle for a topic.
///
/// Always succeeds for a non-empty topic; internal generation failures are
/// recovered with synthesized material inside the pipeline.
pub async fn generate_study_material_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<GenerateStudyMaterialRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let topic = payload.topic.trim();
    if topic.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "topic must not be empty".to_string(),
        ));
    }

    info!(topic, "study material requested");
    let material = app_state
        .study
        .generate_flashcards(topic, payload.source_content.as_deref())
        .await;

    Ok(Json(material))
}

/// Turn summary text into its speech-ready form. Never fails.
pub async fn audio_summary_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<AudioSummaryRequest>,
) -> Json<AudioSummaryResponse> {
    let audio_text = app_state
        .study
        .generate_audio_summary(&payload.text, &payload.language);
    Json(AudioSummaryResponse { audio_text })
}

/// The speech-output languages currently usable on this host.
pub async fn languages_handler(
    State(app_state): State<Arc<AppState>>,
) -> Json<Vec<LanguageDescriptor>> {
    Json(app_state.study.available_languages())
}

/// The static offline practice bank. No generation involved.
pub async fn offline_questions_handler(
    State(app_state): State<Arc<AppState>>,
) -> Json<&'static [OfflineQuizQuestion]> {
    Json(app_state.study.offline_aptitude_questions())
}
