pub mod domain;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod offline;
pub mod ports;
pub mod prompts;
pub mod service;
pub mod speech;
pub mod validate;

pub use domain::{
    Difficulty, FlashCard, LanguageDescriptor, OfflineQuizQuestion, QuizCard, QuizKind,
    StudyMaterial,
};
pub use error::GenerationError;
pub use ports::{CompletionService, PortError, PortResult, VoiceInventory};
pub use service::StudyMaterialService;
