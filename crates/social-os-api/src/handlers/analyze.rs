use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use social_os_core::AnalysisResult;

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::request_origin::RequestOrigin;
use crate::utils::upload::extract_multipart_file;

/// Analyze poster handler
///
/// Stores the uploaded poster, runs AI analysis on it and returns the
/// normalized marketing fields together with the poster's public URL.
///
/// # Errors
/// - `AppError::Validation` - not a JPEG/PNG, empty upload, bad multipart
/// - `AppError::PayloadTooLarge` - upload exceeds the configured limit
/// - `AppError::Config` - AI credentials not configured
/// - `AppError::Upstream` - the AI call failed
/// - `AppError::Parse` - the model reply held no JSON object
#[tracing::instrument(
    skip(state, origin, multipart),
    fields(origin = %origin.0, operation = "analyze_poster")
)]
pub async fn analyze_poster(
    State(state): State<Arc<AppState>>,
    origin: RequestOrigin,
    multipart: Multipart,
) -> Result<Json<AnalysisResult>, HttpAppError> {
    let file = extract_multipart_file(multipart).await?;

    tracing::debug!(
        filename = ?file.filename,
        content_type = ?file.content_type,
        size_bytes = file.data.len(),
        "Received poster upload"
    );

    let result = state
        .analysis
        .analyze(file.data, file.content_type.as_deref(), &origin.0)
        .await?;

    Ok(Json(result))
}
