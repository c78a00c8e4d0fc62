//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{ConfiguredVoiceInventory, OpenAiCompletionAdapter},
    config::Config,
    error::ApiError,
    web::{
        audio_summary_handler, generate_study_material_handler, languages_handler,
        offline_questions_handler, state::AppState,
    },
};
use async_openai::{config::OpenAIConfig, Client};
use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use study_coach_core::{CompletionService, StudyMaterialService};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize Service Adapters ---
    // A missing or unusable credential is not a startup failure: the study
    // service then runs in offline mode and serves synthesized material.
    let completion: Option<Arc<dyn CompletionService>> = match config.usable_openai_key() {
        Some(key) => {
            let openai_config = OpenAIConfig::new().with_api_key(key);
            let openai_client = Client::with_config(openai_config);
            info!(model = %config.completion_model, "Remote generation path enabled.");
            Some(Arc::new(OpenAiCompletionAdapter::new(
                openai_client,
                config.completion_model.clone(),
            )))
        }
        None => {
            warn!("No usable OPENAI_API_KEY configured. Running in offline (fallback-only) mode.");
            None
        }
    };

    let voices = Arc::new(ConfiguredVoiceInventory::new(config.speech_voices.clone()));

    // --- 3. Build the Shared AppState ---
    let study = Arc::new(StudyMaterialService::new(completion, voices));
    let app_state = Arc::new(AppState {
        study,
        config: config.clone(),
    });

    let frontend_origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .map_err(|e| ApiError::Internal(format!("Invalid FRONTEND_ORIGIN: {e}")))?;
    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);

    // --- 4. Create the Web Router ---
    let app = Router::new()
        .route("/study-materials", post(generate_study_material_handler))
        .route("/audio-summary", post(audio_summary_handler))
        .route("/languages", get(languages_handler))
        .route("/offline-questions", get(offline_questions_handler))
        .layer(cors)
        .with_state(app_state);

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
