//! Social OS Plugins
//!
//! Outbound HTTP clients for the two upstream dependencies: the multimodal AI
//! model that reads posters and the Graph API that publishes them.

pub mod gemini_vision;
pub mod instagram_graph;
pub mod publisher;
pub mod vision;

pub use gemini_vision::{GeminiVision, GeminiVisionConfig};
pub use instagram_graph::{InstagramGraph, InstagramGraphConfig};
pub use publisher::{
    ContainerRequest, GraphCredentials, MediaContainer, MediaPublisher, PublishError,
    PublishPhase, PublishedMedia,
};
pub use vision::{InferenceError, VisionModel, VisionRequest};
