//! crates/study_coach_core/src/service.rs
//!
//! The orchestrator for the study material pipeline. Sequences prompt
//! building, the remote completion call, extraction and validation, and
//! routes every internal failure to the fallback synthesizer so the public
//! surface never fails outward.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{
    FlashCard, LanguageDescriptor, OfflineQuizQuestion, QuizCard, StudyMaterial,
};
use crate::error::GenerationError;
use crate::ports::{CompletionService, VoiceInventory};
use crate::{extract, fallback, offline, prompts, speech, validate};

/// Most flashcards kept from a single remote response.
pub const MAX_FLASHCARDS: usize = 8;

/// The public service consumed by the UI layer.
///
/// Holds only fixed configuration: the completion port (absent when no usable
/// credential was configured) and the voice inventory. No per-call state
/// survives between invocations, so concurrent calls proceed independently.
pub struct StudyMaterialService {
    completion: Option<Arc<dyn CompletionService>>,
    voices: Arc<dyn VoiceInventory>,
}

impl StudyMaterialService {
    /// Creates the service. Pass `None` for `completion` when the credential
    /// is missing or unusable; every generation call then takes the fallback
    /// path without touching the network.
    pub fn new(
        completion: Option<Arc<dyn CompletionService>>,
        voices: Arc<dyn VoiceInventory>,
    ) -> Self {
        Self { completion, voices }
    }

    /// Generates a complete study bundle for a topic. Total: any internal
    /// failure is logged and recovered, and a valid `StudyMaterial` is
    /// returned for every non-empty topic.
    ///
    /// The two stages fall back asymmetrically. The flashcard stage is the
    /// primary path: if it fails, all partial state is discarded and the
    /// whole bundle is synthesized. The quiz stage is auxiliary enrichment:
    /// if only it fails, the validated flashcards are kept and just the quiz
    /// is synthesized.
    pub async fn generate_flashcards(
        &self,
        topic: &str,
        source_content: Option<&str>,
    ) -> StudyMaterial {
        let topic = topic.trim();

        let (flashcards, summary) = match self.flashcard_stage(topic, source_content).await {
            Ok(stage) => stage,
            Err(err) => {
                warn!(topic, error = %err, "flashcard generation failed, synthesizing full bundle");
                return synthesized_material(topic);
            }
        };

        let quiz_questions = match self.quiz_stage(topic, &summary).await {
            Ok(cards) => cards,
            Err(err) => {
                warn!(topic, error = %err, "quiz generation failed, keeping flashcards and synthesizing quiz");
                fallback::synthesize_quiz(topic)
            }
        };

        info!(
            topic,
            flashcards = flashcards.len(),
            quiz_questions = quiz_questions.len(),
            "study material generated"
        );

        StudyMaterial {
            topic: topic.to_string(),
            flashcards,
            quiz_questions,
            summary,
            audio_summary: None,
        }
    }

    async fn flashcard_stage(
        &self,
        topic: &str,
        source_content: Option<&str>,
    ) -> Result<(Vec<FlashCard>, String), GenerationError> {
        let completion = self
            .completion
            .as_ref()
            .ok_or(GenerationError::Configuration)?;

        let prompt_pair = prompts::flashcard_prompts(topic, source_content);
        let raw = completion.complete(&prompt_pair).await?;
        let parsed = extract::extract_json(&raw)?;

        let mut flashcards = validate::validate_flashcards(&parsed)?;
        flashcards.truncate(MAX_FLASHCARDS);

        let summary = parsed
            .get("summary")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| fallback::synthesize_summary(topic));

        Ok((flashcards, summary))
    }

    async fn quiz_stage(
        &self,
        topic: &str,
        summary: &str,
    ) -> Result<Vec<QuizCard>, GenerationError> {
        let completion = self
            .completion
            .as_ref()
            .ok_or(GenerationError::Configuration)?;

        let prompt_pair = prompts::quiz_prompts(topic, summary);
        let raw = completion.complete(&prompt_pair).await?;
        let parsed = extract::extract_json(&raw)?;
        validate::validate_quiz_cards(&parsed)
    }

    /// Post-processes text for the speech engine. Total; see
    /// [`speech::enhance_for_speech`].
    pub fn generate_audio_summary(&self, text: &str, language_tag: &str) -> String {
        speech::enhance_for_speech(text, language_tag)
    }

    /// The speech-output languages currently usable on this host.
    pub fn available_languages(&self) -> Vec<LanguageDescriptor> {
        speech::available_languages(self.voices.as_ref())
    }

    /// The static practice bank; involves no generation.
    pub fn offline_aptitude_questions(&self) -> &'static [OfflineQuizQuestion] {
        offline::offline_aptitude_questions()
    }
}

/// The whole-bundle fallback: flashcards, quiz and summary all synthesized.
fn synthesized_material(topic: &str) -> StudyMaterial {
    StudyMaterial {
        topic: topic.to_string(),
        flashcards: fallback::synthesize_flashcards(topic),
        quiz_questions: fallback::synthesize_quiz(topic),
        summary: fallback::synthesize_summary(topic),
        audio_summary: None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::Difficulty;
    use crate::ports::{PortError, PortResult};
    use crate::prompts::PromptPair;

    /// A completion double that replays a fixed script of responses, one per
    /// call, in order.
    struct ScriptedCompletion {
        responses: Mutex<VecDeque<PortResult<String>>>,
    }

    impl ScriptedCompletion {
        fn new(responses: Vec<PortResult<String>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
            })
        }
    }

    #[async_trait]
    impl CompletionService for ScriptedCompletion {
        async fn complete(&self, _prompts: &PromptPair) -> PortResult<String> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(PortError::Transport("script exhausted".to_string())))
        }
    }

    struct NoVoices;

    impl VoiceInventory for NoVoices {
        fn installed_voice_tags(&self) -> Vec<String> {
            Vec::new()
        }
    }

    fn service_with(completion: Option<Arc<dyn CompletionService>>) -> StudyMaterialService {
        StudyMaterialService::new(completion, Arc::new(NoVoices))
    }

    fn flashcard_payload(count: usize) -> String {
        let cards = (0..count)
            .map(|i| {
                format!(
                    r#"{{"question":"Q{i} about Rust","answer":"A{i}","difficulty":"easy"}}"#
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        format!(r#"{{"flashcards":[{cards}],"summary":"Rust in brief."}}"#)
    }

    fn quiz_payload() -> String {
        r#"{"questions":[{"question":"Rust is memory safe.","type":"true_false","options":["False","True"],"correctAnswer":1,"explanation":"It is.","difficulty":"easy"}]}"#
            .to_string()
    }

    #[tokio::test]
    async fn transport_failure_falls_back_to_full_synthesized_bundle() {
        let completion = ScriptedCompletion::new(vec![Err(PortError::Transport(
            "HTTP 500 Internal Server Error".to_string(),
        ))]);
        let service = service_with(Some(completion));

        let material = service.generate_flashcards("Negotiation Skills", None).await;

        assert_eq!(material.flashcards.len(), 8);
        for card in &material.flashcards {
            assert!(card.question.contains("Negotiation Skills"));
        }
        assert!(material.summary.contains("Negotiation Skills"));
        assert_eq!(material.quiz_questions.len(), 4);
        assert_eq!(
            material.quiz_questions,
            fallback::synthesize_quiz("Negotiation Skills")
        );
    }

    #[tokio::test]
    async fn missing_credential_skips_the_network_entirely() {
        let service = service_with(None);
        let material = service.generate_flashcards("History", None).await;
        assert_eq!(material.flashcards, fallback::synthesize_flashcards("History"));
        assert_eq!(material.quiz_questions, fallback::synthesize_quiz("History"));
    }

    #[tokio::test]
    async fn fenced_response_is_extracted_validated_and_kept() {
        let fenced = "Here you go:\n```json\n{\"flashcards\":[{\"question\":\"Q\",\"answer\":\"A\",\"difficulty\":\"easy\"}],\"summary\":\"S\"}\n```";
        let completion = ScriptedCompletion::new(vec![
            Ok(fenced.to_string()),
            Ok(quiz_payload()),
        ]);
        let service = service_with(Some(completion));

        let material = service.generate_flashcards("Rust", None).await;

        assert_eq!(material.flashcards.len(), 1);
        assert_eq!(material.flashcards[0].question, "Q");
        assert_eq!(material.summary, "S");
        assert_eq!(material.quiz_questions.len(), 1);
    }

    #[tokio::test]
    async fn oversized_flashcard_response_is_truncated_to_cap() {
        let completion = ScriptedCompletion::new(vec![
            Ok(flashcard_payload(12)),
            Ok(quiz_payload()),
        ]);
        let service = service_with(Some(completion));

        let material = service.generate_flashcards("Rust", None).await;

        assert_eq!(material.flashcards.len(), MAX_FLASHCARDS);
        assert_eq!(material.flashcards[0].question, "Q0 about Rust");
    }

    #[tokio::test]
    async fn quiz_failure_keeps_flashcards_and_synthesizes_quiz_only() {
        let completion = ScriptedCompletion::new(vec![
            Ok(flashcard_payload(3)),
            Ok("the model rambled and returned no JSON".to_string()),
        ]);
        let service = service_with(Some(completion));

        let material = service.generate_flashcards("Biology", None).await;

        // Model-authored flashcards survive the quiz failure.
        assert_eq!(material.flashcards.len(), 3);
        assert_eq!(material.summary, "Rust in brief.");
        assert_eq!(material.quiz_questions, fallback::synthesize_quiz("Biology"));
    }

    #[tokio::test]
    async fn invalid_flashcard_payload_discards_the_whole_remote_result() {
        // Difficulty missing: validation must reject and the bundle must be
        // fully synthesized, including the quiz (second call never happens).
        let completion = ScriptedCompletion::new(vec![Ok(
            r#"{"flashcards":[{"question":"Q","answer":"A"}],"summary":"S"}"#.to_string(),
        )]);
        let service = service_with(Some(completion));

        let material = service.generate_flashcards("Physics", None).await;

        assert_eq!(material.flashcards, fallback::synthesize_flashcards("Physics"));
        assert_ne!(material.summary, "S");
    }

    #[tokio::test]
    async fn empty_model_summary_is_replaced_with_synthesized_default() {
        let payload = r#"{"flashcards":[{"question":"Q","answer":"A","difficulty":"medium"}],"summary":"  "}"#;
        let completion = ScriptedCompletion::new(vec![
            Ok(payload.to_string()),
            Ok(quiz_payload()),
        ]);
        let service = service_with(Some(completion));

        let material = service.generate_flashcards("Geometry", None).await;

        assert_eq!(material.flashcards.len(), 1);
        assert_eq!(material.flashcards[0].difficulty, Difficulty::Medium);
        assert_eq!(material.summary, fallback::synthesize_summary("Geometry"));
    }

    #[tokio::test]
    async fn empty_completion_content_triggers_full_fallback() {
        let completion = ScriptedCompletion::new(vec![Err(PortError::EmptyContent)]);
        let service = service_with(Some(completion));

        let material = service.generate_flashcards("Astronomy", None).await;

        assert_eq!(material.flashcards, fallback::synthesize_flashcards("Astronomy"));
    }

    #[test]
    fn audio_summary_is_always_produced() {
        let service = service_with(None);
        let enhanced = service.generate_audio_summary("Hello. World.", "hi-IN");
        assert!(enhanced.contains("Hello. ..."));
    }

    #[test]
    fn offline_bank_is_served_without_generation() {
        let service = service_with(None);
        assert_eq!(service.offline_aptitude_questions().len(), 8);
    }
}
