//! Storage setup and initialization

use anyhow::{Context, Result};
use social_os_core::Config;
use social_os_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Create the upload directory and the blob store backed by it.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(upload_dir = %config.upload_dir(), "Initializing storage...");

    let storage = LocalStorage::new(
        config.upload_dir(),
        config.public_base_url().map(str::to_string),
    )
    .await
    .context("Failed to initialize local storage")?;

    match config.public_base_url() {
        Some(base) => tracing::info!(public_base_url = %base, "Storage initialized"),
        None => tracing::info!("Storage initialized; image URLs follow the request host"),
    }

    Ok(Arc::new(storage))
}
