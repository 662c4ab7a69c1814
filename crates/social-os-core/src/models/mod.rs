//! Domain models shared between the orchestrators and the HTTP layer.

pub mod analysis;
pub mod image;
pub mod publish;

pub use analysis::{AnalysisFields, AnalysisResult, HASHTAG_COUNT, UNKNOWN_BRAND};
pub use image::ImageContentType;
pub use publish::{PublishRequest, PublishResponse, PublishTarget};
