//! Request orchestrators
//!
//! Handlers stay thin: they extract the request and delegate to one of these
//! services, which own the ordering of validation, storage and remote calls.

pub mod analysis;
pub mod publish;

pub use analysis::AnalysisService;
pub use publish::PublishService;
