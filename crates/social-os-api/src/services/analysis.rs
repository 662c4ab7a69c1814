//! Poster analysis service
//!
//! Pipeline: validate → store → infer → normalize. Validation and the AI
//! credential check both run before anything is written, so a rejected
//! request leaves no file behind.

use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use social_os_core::{AnalysisResult, AppError};
use social_os_plugins::{VisionModel, VisionRequest};
use social_os_processing::{
    parse_model_output, UploadValidator, RESPONSE_FORMAT_INSTRUCTION, SYSTEM_PROMPT,
};
use social_os_storage::Storage;

#[derive(Clone)]
pub struct AnalysisService {
    storage: Arc<dyn Storage>,
    vision: Arc<dyn VisionModel>,
    max_file_size: usize,
}

impl AnalysisService {
    pub fn new(
        storage: Arc<dyn Storage>,
        vision: Arc<dyn VisionModel>,
        max_file_size: usize,
    ) -> Self {
        Self {
            storage,
            vision,
            max_file_size,
        }
    }

    /// Store the poster, ask the model about it and return normalized fields.
    ///
    /// `request_base_url` is the origin the client used to reach this service;
    /// it only matters when no public base URL is configured.
    pub async fn analyze(
        &self,
        data: Bytes,
        content_type: Option<&str>,
        request_base_url: &str,
    ) -> Result<AnalysisResult, AppError> {
        let start = Instant::now();

        // 1. Validate upload
        let image_type =
            UploadValidator::new(self.max_file_size).validate_all(content_type, data.len())?;

        // 2. Fail on missing AI credentials before storing anything
        self.vision.check_configured()?;

        // 3. Persist
        let stored = self
            .storage
            .upload(image_type, data.clone(), request_base_url)
            .await?;

        // 4. Inference
        let raw_output = self
            .vision
            .generate(VisionRequest {
                system_prompt: SYSTEM_PROMPT,
                instruction: RESPONSE_FORMAT_INSTRUCTION,
                image: &data,
                content_type: stored.content_type,
            })
            .await?;

        // 5. Normalize
        let fields = parse_model_output(&raw_output).map_err(|e| {
            tracing::warn!(
                filename = %stored.filename,
                response_chars = raw_output.len(),
                error = %e,
                "Model output contained no usable JSON object"
            );
            AppError::from(e)
        })?;

        tracing::info!(
            filename = %stored.filename,
            content_type = stored.content_type.mime(),
            size_bytes = stored.size_bytes,
            brand = %fields.brand,
            is_urgent = fields.is_urgent,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Poster analyzed"
        );

        Ok(AnalysisResult::new(fields, stored.public_url, stored.filename))
    }
}
