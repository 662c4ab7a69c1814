//! Social OS API Library
//!
//! This crate provides the HTTP handlers, the analyze and publish
//! orchestrators, and application setup.

mod handlers;
mod telemetry;
mod utils;

pub mod error;
pub mod services;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::{AnalysisService, PublishService};
pub use state::AppState;
