use crate::keys::{generate_filename, is_valid_key};
use crate::traits::{Storage, StorageError, StorageResult, StoredImage};
use async_trait::async_trait;
use bytes::Bytes;
use social_os_core::ImageContentType;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Route prefix under which stored images are served.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
    public_base_url: Option<String>,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for stored images (e.g., "uploads")
    /// * `public_base_url` - Externally visible origin (e.g., "https://abc.ngrok.app");
    ///   when `None`, URLs are derived from each request's own host
    pub async fn new(
        base_path: impl Into<PathBuf>,
        public_base_url: Option<String>,
    ) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            public_base_url: public_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        })
    }

    fn key_to_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if !is_valid_key(filename) {
            return Err(StorageError::InvalidKey(format!(
                "Invalid filename: {}",
                filename
            )));
        }
        Ok(self.base_path.join(filename))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload(
        &self,
        content_type: ImageContentType,
        data: Bytes,
        request_base_url: &str,
    ) -> StorageResult<StoredImage> {
        let filename = generate_filename(content_type);
        let path = self.key_to_path(&filename)?;
        let size = data.len();

        let start = std::time::Instant::now();

        // create_new: a colliding key is an error, never an overwrite
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let public_url = self.public_url(&filename, request_base_url);

        tracing::info!(
            path = %path.display(),
            filename = %filename,
            content_type = content_type.mime(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(StoredImage {
            filename,
            public_url,
            content_type,
            size_bytes: size,
        })
    }

    async fn download(&self, filename: &str) -> StorageResult<Vec<u8>> {
        let path = self.key_to_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(filename.to_string()));
        }

        let data = fs::read(&path).await.map_err(|e| {
            StorageError::DownloadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        tracing::debug!(
            filename = %filename,
            size_bytes = data.len(),
            "Local storage download successful"
        );

        Ok(data)
    }

    fn public_url(&self, filename: &str, request_base_url: &str) -> String {
        let base = self
            .public_base_url
            .as_deref()
            .unwrap_or_else(|| request_base_url.trim_end_matches('/'));
        format!("{}{}/{}", base, UPLOADS_ROUTE, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg_bytes() -> Bytes {
        Bytes::from_static(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
    }

    #[tokio::test]
    async fn test_upload_writes_file_with_matching_extension() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), None).await.unwrap();

        let stored = storage
            .upload(ImageContentType::Jpeg, jpeg_bytes(), "http://localhost:8000")
            .await
            .unwrap();

        assert!(stored.filename.ends_with(".jpg"));
        assert_eq!(stored.size_bytes, 6);
        let on_disk = std::fs::read(dir.path().join(&stored.filename)).unwrap();
        assert_eq!(on_disk, jpeg_bytes().to_vec());
    }

    #[tokio::test]
    async fn test_public_url_uses_request_host_without_override() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), None).await.unwrap();

        let stored = storage
            .upload(ImageContentType::Png, jpeg_bytes(), "http://10.0.0.5:8000/")
            .await
            .unwrap();

        assert_eq!(
            stored.public_url,
            format!("http://10.0.0.5:8000/uploads/{}", stored.filename)
        );
    }

    #[tokio::test]
    async fn test_public_url_prefers_configured_base() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), Some("https://posters.example/".to_string()))
            .await
            .unwrap();

        let url = storage.public_url("abc.png", "http://127.0.0.1:8000");
        assert_eq!(url, "https://posters.example/uploads/abc.png");
    }

    #[tokio::test]
    async fn test_download_round_trip_and_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), None).await.unwrap();

        let stored = storage
            .upload(ImageContentType::Jpeg, jpeg_bytes(), "http://localhost")
            .await
            .unwrap();
        let data = storage.download(&stored.filename).await.unwrap();
        assert_eq!(data, jpeg_bytes().to_vec());

        match storage.download("missing.jpg").await {
            Err(StorageError::NotFound(key)) => assert_eq!(key, "missing.jpg"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_download_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), None).await.unwrap();

        let result = storage.download("../secret.png").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_new_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("uploads");
        LocalStorage::new(&nested, None).await.unwrap();
        assert!(nested.is_dir());
    }
}
