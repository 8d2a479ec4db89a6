mod translation_service;
mod translation_worker;

pub use translation_service::{
    TranslationJobError, TranslationMessage, TranslationService, OUTPUT_FILENAME_PREFIX,
};
pub use translation_worker::TranslationWorker;
