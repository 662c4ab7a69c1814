//! Application state shared by all handlers.

use crate::services::{AnalysisService, PublishService};
use social_os_storage::Storage;
use std::sync::Arc;

/// Immutable per-process state. Nothing in it is mutated after startup, so
/// requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub analysis: AnalysisService,
    pub publish: PublishService,
}
