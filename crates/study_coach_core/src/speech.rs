//! crates/study_coach_core/src/speech.rs
//!
//! Post-processing of summary text for the host's speech engine, and the
//! catalog of languages that engine can currently voice.

use regex::Regex;
use tracing::warn;

use crate::domain::LanguageDescriptor;
use crate::ports::VoiceInventory;

/// Lead-in phrases, keyed by the primary subtag of the language tag.
/// Tags outside this set get pacing markers but no lead-in.
const LEAD_INS: [(&str, &str); 5] = [
    ("en", "Here is your study summary."),
    ("hi", "यह रहा आपका अध्ययन सारांश।"),
    ("es", "Aquí está tu resumen de estudio."),
    ("fr", "Voici votre résumé d'étude."),
    ("de", "Hier ist deine Lernzusammenfassung."),
];

/// The fixed superset of speech-output languages the application knows how to
/// present. Filtered against installed voices at query time.
const LANGUAGE_CATALOG: [LanguageDescriptor; 6] = [
    LanguageDescriptor {
        code: "en-US",
        name: "English",
    },
    LanguageDescriptor {
        code: "hi-IN",
        name: "Hindi",
    },
    LanguageDescriptor {
        code: "es-ES",
        name: "Spanish",
    },
    LanguageDescriptor {
        code: "fr-FR",
        name: "French",
    },
    LanguageDescriptor {
        code: "de-DE",
        name: "German",
    },
    LanguageDescriptor {
        code: "ja-JP",
        name: "Japanese",
    },
];

/// The entry returned when the speech capability is entirely unavailable.
const DEFAULT_LANGUAGE: LanguageDescriptor = LanguageDescriptor {
    code: "en-US",
    name: "English",
};

/// Turns summary text into a speech-friendly form: a pause marker after
/// sentence-ending punctuation, colons and semicolons, and a lead-in phrase
/// for recognized languages.
///
/// Never fails; if the pacing pass cannot run, the text is spoken as-is.
pub fn enhance_for_speech(text: &str, language_tag: &str) -> String {
    let paced = match Regex::new(r"([.!?;:])(\s+|$)") {
        Ok(pause_points) => pause_points.replace_all(text, "$1 ...$2").into_owned(),
        Err(err) => {
            warn!(error = %err, "pacing pass unavailable, speaking text unchanged");
            text.to_string()
        }
    };

    match lead_in_for(language_tag) {
        Some(lead_in) => format!("{lead_in} ... {paced}"),
        None => paced,
    }
}

fn lead_in_for(language_tag: &str) -> Option<&'static str> {
    let primary = primary_subtag(language_tag);
    LEAD_INS
        .iter()
        .find(|(subtag, _)| *subtag == primary)
        .map(|(_, phrase)| *phrase)
}

/// The languages currently usable for speech output: the fixed catalog
/// filtered down to entries with at least one matching installed voice.
///
/// Recomputed on every call — installed voices can change between calls.
pub fn available_languages(voices: &dyn VoiceInventory) -> Vec<LanguageDescriptor> {
    let installed = voices.installed_voice_tags();
    if installed.is_empty() {
        return vec![DEFAULT_LANGUAGE];
    }

    LANGUAGE_CATALOG
        .iter()
        .filter(|descriptor| {
            let wanted = primary_subtag(descriptor.code);
            installed.iter().any(|tag| primary_subtag(tag) == wanted)
        })
        .copied()
        .collect()
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}
