pub mod rest;
pub mod state;

// Re-export the handlers to make them easily accessible to the binary that
// builds the web server router.
pub use rest::{
    audio_summary_handler, generate_study_material_handler, languages_handler,
    offline_questions_handler,
};
