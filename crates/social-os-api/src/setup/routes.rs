//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use social_os_core::Config;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;
    let body_limit = config.max_file_size_bytes() + MULTIPART_OVERHEAD_BYTES;

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/analyze", post(handlers::analyze::analyze_poster))
        .route("/publish", post(handlers::publish::publish_post))
        .route("/uploads/{filename}", get(handlers::uploads::get_upload))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(DefaultBodyLimit::disable())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    Ok(app)
}

/// CORS for the browser dashboard. `*` allows any origin without credentials;
/// explicit origins allow credentials and mirror the requested headers.
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", o))
            })
            .collect::<Result<Vec<_>, _>>()?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    };
    Ok(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use social_os_core::SocialConfig;

    fn config_with_origins(origins: &str) -> Config {
        let origins = origins.to_string();
        Config(Box::new(
            SocialConfig::from_vars(move |key| match key {
                "CORS_ORIGINS" => Some(origins.clone()),
                _ => None,
            })
            .unwrap(),
        ))
    }

    #[test]
    fn test_setup_cors_accepts_explicit_and_wildcard_origins() {
        assert!(setup_cors(&config_with_origins("http://localhost:3000,https://app.example")).is_ok());
        assert!(setup_cors(&config_with_origins("*")).is_ok());
    }

    #[test]
    fn test_setup_cors_rejects_invalid_origin() {
        assert!(setup_cors(&config_with_origins("http://bad\norigin")).is_err());
    }
}
