//! crates/study_coach_core/src/validate.rs
//!
//! Structural validation of parsed model payloads.
//!
//! Shapes are never assumed beyond what these functions confirm: the payload
//! comes in as untyped JSON and leaves as domain values or a `Validation`
//! error naming the field and element that failed. The only coercion applied
//! is the documented `[False, True]` defaulting for true/false options.

use serde_json::Value;

use crate::domain::{Difficulty, FlashCard, QuizCard, QuizKind};
use crate::error::GenerationError;

/// Validates a parsed flashcard payload into domain flashcards.
///
/// The payload must carry a non-empty `flashcards` array whose elements all
/// have non-empty `question` and `answer` strings and an enumerated
/// `difficulty`.
pub fn validate_flashcards(parsed: &Value) -> Result<Vec<FlashCard>, GenerationError> {
    let items = required_array(parsed, "flashcards")?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| flashcard_from_value(index, item))
        .collect()
}

/// Validates a parsed quiz payload into domain quiz cards.
///
/// The payload must carry a non-empty `questions` array; every element needs
/// a non-empty `question` and `explanation`, an enumerated `type` and
/// `difficulty`, options consistent with the type, and a `correctAnswer`
/// index within the options.
pub fn validate_quiz_cards(parsed: &Value) -> Result<Vec<QuizCard>, GenerationError> {
    let items = required_array(parsed, "questions")?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| quiz_card_from_value(index, item))
        .collect()
}

fn required_array<'a>(parsed: &'a Value, field: &str) -> Result<&'a Vec<Value>, GenerationError> {
    let items = parsed
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| GenerationError::Validation(format!("response has no `{field}` array")))?;
    if items.is_empty() {
        return Err(GenerationError::Validation(format!(
            "`{field}` array is empty"
        )));
    }
    Ok(items)
}

fn flashcard_from_value(index: usize, item: &Value) -> Result<FlashCard, GenerationError> {
    let question = non_empty_text(item, "question", "flashcard", index)?;
    let answer = non_empty_text(item, "answer", "flashcard", index)?;
    let difficulty = enumerated_difficulty(item, "flashcard", index)?;
    Ok(FlashCard {
        question,
        answer,
        difficulty,
    })
}

fn quiz_card_from_value(index: usize, item: &Value) -> Result<QuizCard, GenerationError> {
    let question = non_empty_text(item, "question", "question", index)?;
    let explanation = non_empty_text(item, "explanation", "question", index)?;
    let difficulty = enumerated_difficulty(item, "question", index)?;

    let kind_text = item
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| missing(index, "question", "type"))?;
    let kind = QuizKind::parse(kind_text).ok_or_else(|| {
        GenerationError::Validation(format!(
            "question {index}: `type` must be true_false or multiple_choice, got `{kind_text}`"
        ))
    })?;

    let options = options_for(index, item, kind)?;

    let correct_answer = item
        .get("correctAnswer")
        .and_then(Value::as_u64)
        .ok_or_else(|| missing(index, "question", "correctAnswer"))? as usize;
    if correct_answer >= options.len() {
        return Err(GenerationError::Validation(format!(
            "question {index}: `correctAnswer` {correct_answer} is out of range for {} options",
            options.len()
        )));
    }

    Ok(QuizCard {
        question,
        kind,
        options,
        correct_answer,
        explanation,
        difficulty,
    })
}

fn options_for(index: usize, item: &Value, kind: QuizKind) -> Result<Vec<String>, GenerationError> {
    let provided = item.get("options").and_then(Value::as_array);
    match (kind, provided) {
        // A model answering true/false often omits the options entirely.
        (QuizKind::TrueFalse, None) => Ok(vec!["False".to_string(), "True".to_string()]),
        (QuizKind::TrueFalse, Some(values)) => {
            let options = text_options(index, values)?;
            if options.len() != 2 {
                return Err(GenerationError::Validation(format!(
                    "question {index}: true_false requires exactly 2 options, got {}",
                    options.len()
                )));
            }
            Ok(options)
        }
        (QuizKind::MultipleChoice, None) => Err(missing(index, "question", "options")),
        (QuizKind::MultipleChoice, Some(values)) => {
            let options = text_options(index, values)?;
            if !(3..=4).contains(&options.len()) {
                return Err(GenerationError::Validation(format!(
                    "question {index}: multiple_choice requires 3 or 4 options, got {}",
                    options.len()
                )));
            }
            Ok(options)
        }
    }
}

fn text_options(index: usize, values: &[Value]) -> Result<Vec<String>, GenerationError> {
    values
        .iter()
        .map(|value| {
            value
                .as_str()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
                .ok_or_else(|| {
                    GenerationError::Validation(format!(
                        "question {index}: `options` must be non-empty strings"
                    ))
                })
        })
        .collect()
}

fn non_empty_text(
    item: &Value,
    field: &str,
    element: &str,
    index: usize,
) -> Result<String, GenerationError> {
    item.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or_else(|| missing(index, element, field))
}

fn enumerated_difficulty(
    item: &Value,
    element: &str,
    index: usize,
) -> Result<Difficulty, GenerationError> {
    let text = item
        .get("difficulty")
        .and_then(Value::as_str)
        .ok_or_else(|| missing(index, element, "difficulty"))?;
    Difficulty::parse(text).ok_or_else(|| {
        GenerationError::Validation(format!(
            "{element} {index}: `difficulty` must be easy, medium or hard, got `{text}`"
        ))
    })
}

fn missing(index: usize, element: &str, field: &str) -> GenerationError {
    GenerationError::Validation(format!(
        "{element} {index} is missing a non-empty `{field}`"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_a_well_formed_flashcard_payload() {
        let parsed = json!({
            "flashcards": [
                {"question": "Q1", "answer": "A1", "difficulty": "easy"},
                {"question": "Q2", "answer": "A2", "difficulty": "hard"},
            ]
        });
        let cards = validate_flashcards(&parsed).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "Q1");
        assert_eq!(cards[1].difficulty, Difficulty::Hard);
    }

    #[test]
    fn rejects_payload_without_flashcards_array() {
        let err = validate_flashcards(&json!({"cards": []})).unwrap_err();
        assert!(err.to_string().contains("`flashcards` array"));
    }

    #[test]
    fn rejects_empty_flashcards_array() {
        let err = validate_flashcards(&json!({"flashcards": []})).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_flashcard_missing_difficulty() {
        let parsed = json!({"flashcards": [{"question": "Q", "answer": "A"}]});
        let err = validate_flashcards(&parsed).unwrap_err();
        assert!(err.to_string().contains("difficulty"));
    }

    #[test]
    fn rejects_unknown_difficulty_level() {
        let parsed = json!({
            "flashcards": [{"question": "Q", "answer": "A", "difficulty": "brutal"}]
        });
        let err = validate_flashcards(&parsed).unwrap_err();
        assert!(err.to_string().contains("brutal"));
    }

    #[test]
    fn rejects_blank_question_text() {
        let parsed = json!({
            "flashcards": [{"question": "   ", "answer": "A", "difficulty": "easy"}]
        });
        assert!(validate_flashcards(&parsed).is_err());
    }

    #[test]
    fn accepts_a_well_formed_quiz_payload() {
        let parsed = json!({
            "questions": [{
                "question": "Is water wet?",
                "type": "true_false",
                "options": ["False", "True"],
                "correctAnswer": 1,
                "explanation": "It is.",
                "difficulty": "easy"
            }, {
                "question": "Pick one.",
                "type": "multiple_choice",
                "options": ["a", "b", "c", "d"],
                "correctAnswer": 3,
                "explanation": "Because.",
                "difficulty": "medium"
            }]
        });
        let cards = validate_quiz_cards(&parsed).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].kind, QuizKind::TrueFalse);
        assert_eq!(cards[1].correct_answer, 3);
    }

    #[test]
    fn defaults_true_false_options_when_omitted() {
        let parsed = json!({
            "questions": [{
                "question": "Q",
                "type": "true_false",
                "correctAnswer": 0,
                "explanation": "E",
                "difficulty": "easy"
            }]
        });
        let cards = validate_quiz_cards(&parsed).unwrap();
        assert_eq!(cards[0].options, vec!["False", "True"]);
    }

    #[test]
    fn rejects_out_of_range_correct_answer() {
        let parsed = json!({
            "questions": [{
                "question": "Q",
                "type": "multiple_choice",
                "options": ["a", "b", "c"],
                "correctAnswer": 3,
                "explanation": "E",
                "difficulty": "easy"
            }]
        });
        let err = validate_quiz_cards(&parsed).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn rejects_negative_correct_answer() {
        let parsed = json!({
            "questions": [{
                "question": "Q",
                "type": "true_false",
                "correctAnswer": -1,
                "explanation": "E",
                "difficulty": "easy"
            }]
        });
        assert!(validate_quiz_cards(&parsed).is_err());
    }

    #[test]
    fn rejects_unknown_question_type() {
        let parsed = json!({
            "questions": [{
                "question": "Q",
                "type": "essay",
                "correctAnswer": 0,
                "explanation": "E",
                "difficulty": "easy"
            }]
        });
        let err = validate_quiz_cards(&parsed).unwrap_err();
        assert!(err.to_string().contains("essay"));
    }

    #[test]
    fn rejects_multiple_choice_with_too_few_options() {
        let parsed = json!({
            "questions": [{
                "question": "Q",
                "type": "multiple_choice",
                "options": ["a", "b"],
                "correctAnswer": 0,
                "explanation": "E",
                "difficulty": "easy"
            }]
        });
        let err = validate_quiz_cards(&parsed).unwrap_err();
        assert!(err.to_string().contains("3 or 4 options"));
    }
}
