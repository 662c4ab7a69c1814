//! Social OS Core Library
//!
//! This crate provides the domain models, error taxonomy, configuration and
//! request validation shared by every Social OS component.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{BaseConfig, BrandAccounts, Config, SocialConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use validation::{validate_publish_request, ValidPublish};
pub use models::{
    AnalysisFields, AnalysisResult, ImageContentType, PublishRequest, PublishResponse,
    PublishTarget,
};
