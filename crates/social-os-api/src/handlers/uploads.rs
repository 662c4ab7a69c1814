//! Static retrieval of stored posters.
//!
//! The Graph API fetches published images from here, so the route is public.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use social_os_core::{AppError, ImageContentType};
use std::sync::Arc;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[tracing::instrument(skip(state), fields(operation = "get_upload"))]
pub async fn get_upload(
    Path(filename): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, HttpAppError> {
    let data = state.storage.download(&filename).await.map_err(AppError::from)?;

    let content_type = ImageContentType::from_filename(&filename)
        .map(|ct| ct.mime())
        .unwrap_or(FALLBACK_CONTENT_TYPE);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, data.len())
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(data))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            HttpAppError::from(AppError::Internal(e.to_string()))
        })?;

    Ok(response)
}
