use crate::application::ports::{Translator, TranslatorError};
use crate::domain::TranslationRequest;

/// Echoes a tagged copy of the input, enough to observe that a unit passed
/// through the translation path.
pub struct MockTranslator;

#[async_trait::async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        request: &TranslationRequest,
    ) -> Result<String, TranslatorError> {
        Ok(format!("[{}] {}", request.target_lang, text))
    }
}
