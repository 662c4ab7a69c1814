//! Common utilities for file upload handlers

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;
use social_os_core::AppError;

/// The single file part of an upload request.
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Bytes,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(
            "Request body exceeds the maximum allowed upload size".to_string(),
        );
    }
    AppError::Validation(format!("{}: {}", context, err.body_text()))
}

/// Extract file data, filename, and content type from multipart form.
/// Only one field named "file" is accepted; multiple file fields are rejected.
pub async fn extract_multipart_file(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart", e))?
    {
        if field.name() != Some("file") {
            continue;
        }

        if file.is_some() {
            return Err(AppError::Validation(
                "Multiple file fields are not allowed; send exactly one field named 'file'"
                    .to_string(),
            ));
        }

        let filename = field.file_name().map(|s| s.to_string());
        let content_type = field.content_type().map(|s| s.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file data", e))?;

        file = Some(UploadedFile {
            data,
            filename,
            content_type,
        });
    }

    file.ok_or_else(|| AppError::Validation("No file provided".to_string()))
}
