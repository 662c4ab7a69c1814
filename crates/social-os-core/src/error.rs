//! Error types module
//!
//! Every request-level failure is expressed as an `AppError`. The variants form
//! a closed taxonomy: caller mistakes, deployment misconfiguration, unusable
//! model output and failing remote dependencies each map to exactly one HTTP
//! status. None of them are retried internally.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for failures of remote dependencies
    Warn,
    /// Error level - for misconfiguration and unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "UPSTREAM_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The caller sent something unusable (bad content type, empty field).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Required credentials or settings are missing from the deployment.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The AI model produced no recoverable JSON object.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A remote dependency (AI provider or Graph API) failed.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The upload exceeds the configured size limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::Validation(_) => (400, "VALIDATION_ERROR", LogLevel::Debug),
        AppError::Config(_) => (500, "CONFIG_ERROR", LogLevel::Error),
        AppError::Parse(_) => (500, "PARSE_ERROR", LogLevel::Warn),
        AppError::Upstream(_) => (502, "UPSTREAM_ERROR", LogLevel::Warn),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", LogLevel::Debug),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "ValidationError",
            AppError::Config(_) => "ConfigError",
            AppError::Parse(_) => "ParseError",
            AppError::Upstream(_) => "UpstreamError",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Validation(ref msg) => msg.clone(),
            AppError::Config(ref msg) => msg.clone(),
            AppError::Parse(ref msg) => msg.clone(),
            AppError::Upstream(ref msg) => msg.clone(),
            AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::NotFound(ref msg) => msg.clone(),
            // Storage paths and OS errors stay in the logs.
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}
