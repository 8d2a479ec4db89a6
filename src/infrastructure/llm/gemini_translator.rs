use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::TranslationRequest;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Generation parameters tuned for low-variance, deterministic-leaning
/// output.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 1.0,
            top_k: 32,
            max_output_tokens: 2000,
        }
    }
}

pub struct GeminiTranslator {
    client: Client,
    base_url: String,
    model: String,
    generation: GenerationSettings,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GeminiTranslator {
    pub fn new(model: String, generation: GenerationSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
            generation,
        }
    }
}

#[async_trait]
impl Translator for GeminiTranslator {
    async fn translate(
        &self,
        text: &str,
        request: &TranslationRequest,
    ) -> Result<String, TranslatorError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(text, request),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.generation.temperature,
                top_p: self.generation.top_p,
                top_k: self.generation.top_k,
                max_output_tokens: self.generation.max_output_tokens,
                seed: request.seed,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, request.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TranslatorError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslatorError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslatorError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let content_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TranslatorError::InvalidResponse(e.to_string()))?;

        let translated = content_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| TranslatorError::InvalidResponse("no candidates".to_string()))?;

        Ok(strip_wrapping_quotes(translated.trim()).to_string())
    }
}

/// Fixed instruction template. The model is told to answer with the
/// translation alone, so anything else it emits is a defect its caller
/// guards against.
pub fn build_prompt(text: &str, request: &TranslationRequest) -> String {
    format!(
        "You are a professional translator. Translate the following text from \
         {source} to {target} in {style}.\n\
         Rules:\n\
         1. Return only the final translation, with no extra commentary\n\
         2. Preserve the original meaning and structure exactly\n\
         3. Take care with specialized terminology\n\
         4. The translated text must read fluently and naturally\n\
         \n\
         Text to translate:\n\
         \"{text}\"",
        source = request.source_lang,
        target = request.target_lang,
        style = request.style.instruction(),
        text = text,
    )
}

/// Models occasionally wrap their answer in quotes; drop at most one from
/// each end.
pub fn strip_wrapping_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}
