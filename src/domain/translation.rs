use super::language::is_rtl;
use super::TranslationStyle;

/// Parameters of one translation job. Immutable for the job's duration.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub api_key: String,
    pub source_lang: String,
    pub target_lang: String,
    pub style: TranslationStyle,
    pub seed: Option<i64>,
}

impl TranslationRequest {
    pub fn target_is_rtl(&self) -> bool {
        is_rtl(&self.target_lang)
    }
}

/// Fail-open result of translating one unit: either the model's output, or
/// the original text kept after a masked failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated(String),
    Unchanged { text: String, reason: String },
}

impl TranslationOutcome {
    pub fn into_text(self) -> String {
        match self {
            TranslationOutcome::Translated(text) => text,
            TranslationOutcome::Unchanged { text, .. } => text,
        }
    }
}
