//! Profile generation via the Gemini `generateContent` API.
//!
//! One request per submission, constrained to the fixed response schema.
//! There is no retry and no backoff: a failure of any kind is reported once
//! and the user re-submits.

use std::env;
use std::time::Duration;

use brandbook_core::models::profile::ProfileRequest;
use brandbook_core::models::result::GenerationResult;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::GeminiError;
use crate::prompt::build_prompt;
use crate::protocol::{GenerateContentRequest, GenerateContentResponse};
use crate::schema::response_schema;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Absent keys are allowed here; `generate` refuses to run without one.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GeminiConfig {
    /// Read `GEMINI_API_KEY` (or `API_KEY`), `GEMINI_MODEL`,
    /// `GEMINI_BASE_URL` and `GEMINI_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty());
        let timeout = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            api_key,
            model: env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            temperature: defaults.temperature,
            timeout,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeminiError::Client(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub fn has_credential(&self) -> bool {
        self.api_key().is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Generate a company profile for `request`.
    ///
    /// Fails with `MissingCredential` before any network traffic when no key
    /// is configured.
    pub async fn generate(&self, request: &ProfileRequest) -> Result<GenerationResult, GeminiError> {
        let api_key = self.api_key().ok_or(GeminiError::MissingCredential)?;

        let generation_id = Uuid::new_v4();
        let prompt = build_prompt(request);
        info!(
            generation_id = %generation_id,
            model = %self.config.model,
            slides = request.slides.len(),
            locale = %request.locale,
            "starting profile generation"
        );
        debug!(generation_id = %generation_id, prompt_len = prompt.len(), "prompt built");

        let body = GenerateContentRequest::json_prompt(
            prompt,
            response_schema(),
            self.config.temperature,
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(generation_id = %generation_id, error = %e, "provider request failed");
                GeminiError::Request(e.to_string())
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GeminiError::Request(e.to_string()))?;

        if !status.is_success() {
            error!(generation_id = %generation_id, status = status.as_u16(), "provider rejected request");
            return Err(GeminiError::Provider {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GeminiError::ResponseParse(format!("invalid response envelope: {e}")))?;

        let output = envelope.text().ok_or_else(|| {
            let reason = envelope
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            GeminiError::ResponseParse(format!("no text in response ({reason})"))
        })?;

        let result = parse_generation_result(&output)?;

        info!(
            generation_id = %generation_id,
            pages = result.meta.pages,
            html_len = result.html_fallback.len(),
            has_pdf = result.has_pdf(),
            "profile generation complete"
        );

        Ok(result)
    }
}

/// Parse the model's text as a `GenerationResult`.
///
/// Invalid JSON and missing required fields are both schema violations; no
/// attempt is made to repair the payload.
pub fn parse_generation_result(text: &str) -> Result<GenerationResult, GeminiError> {
    serde_json::from_str(text.trim()).map_err(|e| {
        GeminiError::SchemaViolation(format!("failed to parse GenerationResult: {e}"))
    })
}
