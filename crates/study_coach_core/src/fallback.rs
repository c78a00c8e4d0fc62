//! crates/study_coach_core/src/fallback.rs
//!
//! Deterministic, network-free synthesis of a complete study bundle.
//!
//! When the remote generation path fails at any stage, the orchestrator turns
//! here. The templates are fixed and the topic is the only input, so two
//! calls with the same topic always produce identical output. That
//! determinism is part of the contract, not an accident of the templates.

use crate::domain::{Difficulty, FlashCard, QuizCard, QuizKind};

const FLASHCARD_TEMPLATES: [(&str, &str, Difficulty); 8] = [
    (
        "What is {topic} in simple terms?",
        "{topic} is a subject area whose core ideas can be learned step by step, starting from its basic definitions and building toward practical use.",
        Difficulty::Easy,
    ),
    (
        "Why is {topic} worth studying?",
        "Understanding {topic} builds a foundation you can apply in real situations and makes related subjects easier to pick up.",
        Difficulty::Easy,
    ),
    (
        "What are the key concepts of {topic}?",
        "The key concepts of {topic} are its fundamental principles, the vocabulary used to talk about it, and the common techniques practitioners rely on.",
        Difficulty::Easy,
    ),
    (
        "How would you explain {topic} to a beginner?",
        "Start with what problem {topic} addresses, give one everyday example, and only then introduce its terminology.",
        Difficulty::Medium,
    ),
    (
        "Where is {topic} applied in practice?",
        "{topic} shows up wherever its core techniques solve real problems; studying worked examples is the fastest way to recognize those situations.",
        Difficulty::Medium,
    ),
    (
        "What is a common misconception about {topic}?",
        "A common misconception is that {topic} can be memorized; in practice it has to be understood and applied to stick.",
        Difficulty::Medium,
    ),
    (
        "How do the main ideas of {topic} relate to each other?",
        "The main ideas of {topic} build on one another: the fundamentals define the terms, the principles connect them, and the techniques apply them.",
        Difficulty::Hard,
    ),
    (
        "How would you evaluate your own mastery of {topic}?",
        "You have mastered {topic} when you can explain it without notes, answer unfamiliar questions about it, and teach it to someone else.",
        Difficulty::Hard,
    ),
];

/// Synthesizes the fixed eight-card flashcard set for a topic.
pub fn synthesize_flashcards(topic: &str) -> Vec<FlashCard> {
    FLASHCARD_TEMPLATES
        .iter()
        .map(|(question, answer, difficulty)| FlashCard {
            question: question.replace("{topic}", topic),
            answer: answer.replace("{topic}", topic),
            difficulty: *difficulty,
        })
        .collect()
}

/// Synthesizes the fixed four-question quiz for a topic.
pub fn synthesize_quiz(topic: &str) -> Vec<QuizCard> {
    vec![
        QuizCard {
            question: format!("{topic} can be learned effectively through regular practice."),
            kind: QuizKind::TrueFalse,
            options: vec!["False".to_string(), "True".to_string()],
            correct_answer: 1,
            explanation: format!(
                "Like any subject, {topic} rewards consistent, spaced practice far more than cramming."
            ),
            difficulty: Difficulty::Easy,
        },
        QuizCard {
            question: format!("What is the best first step when studying {topic}?"),
            kind: QuizKind::MultipleChoice,
            options: vec![
                "Memorize advanced details".to_string(),
                "Understand the fundamental concepts".to_string(),
                "Skip directly to practice exams".to_string(),
                "Read only summaries".to_string(),
            ],
            correct_answer: 1,
            explanation: format!(
                "Grasping the fundamentals of {topic} first makes everything built on them easier to retain."
            ),
            difficulty: Difficulty::Easy,
        },
        QuizCard {
            question: format!("Which habit helps most when applying {topic} in practice?"),
            kind: QuizKind::MultipleChoice,
            options: vec![
                "Working through real examples".to_string(),
                "Rereading the same notes".to_string(),
                "Avoiding difficult problems".to_string(),
            ],
            correct_answer: 0,
            explanation: format!(
                "Applying {topic} to concrete examples turns passive knowledge into a usable skill."
            ),
            difficulty: Difficulty::Medium,
        },
        QuizCard {
            question: format!(
                "Teaching {topic} to someone else is a reliable test of your own understanding."
            ),
            kind: QuizKind::TrueFalse,
            options: vec!["False".to_string(), "True".to_string()],
            correct_answer: 1,
            explanation: format!(
                "Explaining {topic} in your own words quickly exposes any gaps in understanding."
            ),
            difficulty: Difficulty::Hard,
        },
    ]
}

/// Synthesizes the default summary used when the model supplies none, and the
/// summary of a fully synthesized bundle.
pub fn synthesize_summary(topic: &str) -> String {
    format!(
        "{topic} is a rich subject that rewards structured study. Begin with its fundamental \
         concepts, connect them through worked examples, and return to the material over several \
         sessions. These flashcards and quiz questions cover the essential ground of {topic}; use \
         them to check your understanding as you go."
    )
}
