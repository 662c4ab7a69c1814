//! Service initialization

use crate::services::{AnalysisService, PublishService};
use crate::state::AppState;
use anyhow::Result;
use social_os_core::Config;
use social_os_plugins::{
    GeminiVision, GeminiVisionConfig, InstagramGraph, InstagramGraphConfig, MediaPublisher,
    VisionModel,
};
use social_os_storage::Storage;
use std::sync::Arc;

/// Build the production clients and assemble the application state.
pub fn initialize_services(config: &Config, storage: Arc<dyn Storage>) -> Result<Arc<AppState>> {
    let vision: Arc<dyn VisionModel> =
        Arc::new(GeminiVision::new(GeminiVisionConfig::from_config(config))?);
    let publisher: Arc<dyn MediaPublisher> =
        Arc::new(InstagramGraph::new(InstagramGraphConfig::from_config(config))?);

    if config.gemini_api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; /analyze will fail until it is configured");
    }
    if config.meta_access_token().is_none() || config.instagram_business_account_id().is_none() {
        tracing::warn!("Meta API credentials are incomplete; /publish may fail");
    }

    Ok(build_state(config, storage, vision, publisher))
}

/// Assemble application state from already-constructed collaborators.
pub fn build_state(
    config: &Config,
    storage: Arc<dyn Storage>,
    vision: Arc<dyn VisionModel>,
    publisher: Arc<dyn MediaPublisher>,
) -> Arc<AppState> {
    let analysis = AnalysisService::new(storage.clone(), vision, config.max_file_size_bytes());
    let publish = PublishService::new(config.clone(), publisher);

    Arc::new(AppState {
        storage,
        analysis,
        publish,
    })
}
