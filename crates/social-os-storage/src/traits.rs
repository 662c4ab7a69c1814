//! Storage abstraction trait
//!
//! This module defines the Storage trait that blob store backends implement.

use async_trait::async_trait;
use bytes::Bytes;
use social_os_core::{AppError, ImageContentType};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(key) => AppError::NotFound(format!("File not found: {}", key)),
            StorageError::InvalidKey(msg) => AppError::Validation(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// An image persisted by the blob store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Storage identifier, also the last path segment of the public URL.
    pub filename: String,
    pub public_url: String,
    pub content_type: ImageContentType,
    pub size_bytes: usize,
}

/// Blob store abstraction
///
/// Images are written once under a freshly generated key and never mutated or
/// deleted by this service.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist an image durably and return its identifier and public URL.
    ///
    /// `request_base_url` is the externally visible origin of the inbound
    /// request (e.g. `http://localhost:8000`); it is only used when no public
    /// base URL is configured.
    async fn upload(
        &self,
        content_type: ImageContentType,
        data: Bytes,
        request_base_url: &str,
    ) -> StorageResult<StoredImage>;

    /// Read a previously stored image by its identifier.
    async fn download(&self, filename: &str) -> StorageResult<Vec<u8>>;

    /// Public URL under which `filename` is served.
    fn public_url(&self, filename: &str, request_base_url: &str) -> String;
}
