mod gemini_translator;
mod mock_translator;

pub use gemini_translator::{
    build_prompt, strip_wrapping_quotes, GeminiTranslator, GenerationSettings,
};
pub use mock_translator::MockTranslator;
