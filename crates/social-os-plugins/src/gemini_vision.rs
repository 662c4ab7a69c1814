//! Gemini vision client for poster analysis using Google's Generative Language API

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine;
use serde::Serialize;
use serde_json::Value;
use social_os_core::Config;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::{Duration, Instant};

use crate::vision::{InferenceError, VisionModel, VisionRequest};

const TEMPERATURE: f64 = 0.4;
const MAX_OUTPUT_TOKENS: u32 = 800;
const FALLBACK_ERROR_MESSAGE: &str = "Gemini API error.";

/// Gemini client configuration
#[derive(Clone)]
pub struct GeminiVisionConfig {
    pub api_key: Option<String>,
    /// Model identifier (default: gemini-1.5-flash)
    pub model: String,
    /// API root up to and including the version segment
    pub api_base: String,
    pub timeout: Duration,
}

impl GeminiVisionConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.gemini_api_key().map(str::to_string),
            model: config.gemini_model().to_string(),
            api_base: config.gemini_api_base().to_string(),
            timeout: Duration::from_secs(config.gemini_timeout_secs()),
        }
    }
}

impl Debug for GeminiVisionConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiVisionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Gemini vision client
pub struct GeminiVision {
    http_client: reqwest::Client,
    config: GeminiVisionConfig,
}

impl Debug for GeminiVision {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiVision")
            .field("model", &self.config.model)
            .finish()
    }
}

// generateContent request structures
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: &'static str,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

impl GeminiVision {
    pub fn new(config: GeminiVisionConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client for Gemini")?;

        Ok(Self {
            http_client,
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request<'a>(request: &VisionRequest<'a>) -> GenerateContentRequest<'a> {
        let data = base64::engine::general_purpose::STANDARD.encode(request.image);

        GenerateContentRequest {
            system_instruction: Content {
                parts: vec![Part::Text {
                    text: request.system_prompt,
                }],
            },
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: request.instruction,
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: request.content_type.mime(),
                            data,
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }

    fn map_send_error(&self, err: reqwest::Error) -> InferenceError {
        // The API key travels in the query string; keep it out of messages.
        let err = err.without_url();
        if err.is_timeout() {
            InferenceError::Transport(format!(
                "request timed out after {}s",
                self.config.timeout.as_secs()
            ))
        } else {
            InferenceError::Transport(err.to_string())
        }
    }
}

/// Concatenate `candidates[].content.parts[].text` in order. Parts without a
/// string `text` contribute nothing.
fn collect_candidate_text(body: &Value) -> String {
    body.get("candidates")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|candidate| candidate.get("content")?.get("parts")?.as_array())
        .flatten()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect()
}

fn remote_error_message(body: &Value) -> String {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
        .to_string()
}

#[async_trait]
impl VisionModel for GeminiVision {
    fn check_configured(&self) -> Result<(), InferenceError> {
        match self.config.api_key {
            Some(_) => Ok(()),
            None => Err(InferenceError::MissingApiKey),
        }
    }

    async fn generate(&self, request: VisionRequest<'_>) -> Result<String, InferenceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(InferenceError::MissingApiKey)?;

        let body = Self::build_request(&request);
        let start = Instant::now();

        tracing::info!(
            model = %self.config.model,
            image_size = request.image.len(),
            content_type = request.content_type.mime(),
            "Sending poster to Gemini"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;
        let parsed = serde_json::from_str::<Value>(&text);

        if status.is_client_error() || status.is_server_error() {
            let message = parsed
                .as_ref()
                .map(remote_error_message)
                .unwrap_or_else(|_| FALLBACK_ERROR_MESSAGE.to_string());
            tracing::warn!(
                model = %self.config.model,
                status = %status,
                error = %message,
                "Gemini returned an error status"
            );
            return Err(InferenceError::Remote(message));
        }

        let parsed = parsed.map_err(|e| {
            InferenceError::Transport(format!("response body is not JSON: {}", e))
        })?;
        let output = collect_candidate_text(&parsed);

        tracing::info!(
            model = %self.config.model,
            response_chars = output.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Gemini inference completed"
        );

        Ok(output)
    }
}
