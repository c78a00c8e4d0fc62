//! crates/study_coach_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport; the serde attributes only
//! pin the wire casing the UI layer already speaks.

use serde::{Deserialize, Serialize};

/// How demanding a flashcard or quiz question is for the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parses the lowercase wire form used by the model and the UI.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A question/answer pair used for self-study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashCard {
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
}

/// The two gradable question shapes the quiz stage can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizKind {
    TrueFalse,
    MultipleChoice,
}

impl QuizKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "true_false" => Some(QuizKind::TrueFalse),
            "multiple_choice" => Some(QuizKind::MultipleChoice),
            _ => None,
        }
    }
}

/// A gradable quiz question with a designated correct option.
///
/// Invariant: `correct_answer` indexes into `options`. `TrueFalse` cards carry
/// exactly two options; `MultipleChoice` cards carry three or four.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizCard {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuizKind,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    pub difficulty: Difficulty,
}

/// The bundle returned to callers. Immutable once produced; the caller owns it
/// and no partial or streaming updates are ever made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyMaterial {
    pub topic: String,
    pub flashcards: Vec<FlashCard>,
    pub quiz_questions: Vec<QuizCard>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_summary: Option<String>,
}

/// One entry of the static, network-independent practice bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineQuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: usize,
    pub explanation: &'static str,
}

/// A speech-output language the host may be able to voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    pub code: &'static str,
    pub name: &'static str,
}
