//! crates/study_coach_core/src/prompts.rs
//!
//! Builds the system/user prompt pairs for the two generation stages.
//! Pure functions of their inputs; the system prompts fix the structural
//! contract the model must obey so the extractor and validator downstream
//! have something to hold it to.

/// Number of flashcards requested from the model in a single completion.
pub const REQUESTED_FLASHCARDS: usize = 6;

/// Number of quiz questions requested from the model in a single completion.
pub const REQUESTED_QUIZ_ITEMS: usize = 6;

/// Longest prefix of caller-supplied source content embedded in a prompt,
/// so a pasted document cannot blow up the request size.
pub const SOURCE_PREVIEW_CHARS: usize = 2000;

const FLASHCARD_SYSTEM_TEMPLATE: &str = r#"You are an expert tutor creating study flashcards.

Rules you MUST follow:
- Create exactly {count} flashcards about the topic "{topic}".
- Every question must mention "{topic}" explicitly.
- Spread the difficulty across easy, medium and hard cards.
- Respond with JSON only. No prose, no markdown, no commentary.

Respond in exactly this format:
{
  "flashcards": [
    {"question": "...", "answer": "...", "difficulty": "easy|medium|hard"}
  ],
  "summary": "A short paragraph summarizing the topic for a learner."
}"#;

const QUIZ_SYSTEM_TEMPLATE: &str = r#"You are an expert examiner writing a short quiz.

Rules you MUST follow:
- Create exactly {count} quiz questions about the topic "{topic}".
- Every question must mention "{topic}" explicitly.
- Mix true_false and multiple_choice questions.
- true_false questions have exactly the options ["False", "True"].
- multiple_choice questions have 3 or 4 options.
- "correctAnswer" is the zero-based index of the correct option.
- Respond with JSON only. No prose, no markdown, no commentary.

Respond in exactly this format:
{
  "questions": [
    {
      "question": "...",
      "type": "true_false|multiple_choice",
      "options": ["..."],
      "correctAnswer": 0,
      "explanation": "...",
      "difficulty": "easy|medium|hard"
    }
  ]
}"#;

/// One system/user message pair, ready for a single completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Builds the prompts for the flashcard stage.
///
/// When `source_content` is present, only its first [`SOURCE_PREVIEW_CHARS`]
/// characters are embedded.
pub fn flashcard_prompts(topic: &str, source_content: Option<&str>) -> PromptPair {
    let system = FLASHCARD_SYSTEM_TEMPLATE
        .replace("{count}", &REQUESTED_FLASHCARDS.to_string())
        .replace("{topic}", topic);

    let user = match source_content {
        Some(source) => {
            let preview = source.chars().take(SOURCE_PREVIEW_CHARS).collect::<String>();
            format!(
                "Create the flashcards for the topic \"{}\" based on this source material:\n\n{}",
                topic, preview
            )
        }
        None => format!("Create the flashcards for the topic \"{}\".", topic),
    };

    PromptPair { system, user }
}

/// Builds the prompts for the quiz stage. The summary produced (or defaulted)
/// by the flashcard stage anchors the questions to the same material.
pub fn quiz_prompts(topic: &str, summary: &str) -> PromptPair {
    let system = QUIZ_SYSTEM_TEMPLATE
        .replace("{count}", &REQUESTED_QUIZ_ITEMS.to_string())
        .replace("{topic}", topic);

    let user = format!(
        "Create the quiz for the topic \"{}\". Base the questions on this summary:\n\n{}",
        topic, summary
    );

    PromptPair { system, user }
}
