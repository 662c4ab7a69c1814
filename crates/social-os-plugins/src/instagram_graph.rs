//! Instagram Graph API publisher

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use social_os_core::{Config, PublishTarget};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::{Duration, Instant};

use crate::publisher::{
    ContainerRequest, GraphCredentials, MediaContainer, MediaPublisher, PublishError,
    PublishPhase, PublishedMedia,
};

const FALLBACK_ERROR_MESSAGE: &str = "Unknown Meta API error.";

/// Graph API client configuration
#[derive(Debug, Clone)]
pub struct InstagramGraphConfig {
    /// API root without the version segment (e.g. https://graph.facebook.com)
    pub api_base: String,
    /// Version segment (e.g. v21.0)
    pub api_version: String,
    pub timeout: Duration,
}

impl InstagramGraphConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_base: config.graph_api_base().to_string(),
            api_version: config.graph_api_version().to_string(),
            timeout: Duration::from_secs(config.graph_timeout_secs()),
        }
    }
}

/// Instagram Graph API publisher
pub struct InstagramGraph {
    http_client: reqwest::Client,
    config: InstagramGraphConfig,
}

impl Debug for InstagramGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("InstagramGraph")
            .field("api_version", &self.config.api_version)
            .finish()
    }
}

impl InstagramGraph {
    pub fn new(config: InstagramGraphConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client for Graph API")?;

        Ok(Self {
            http_client,
            config,
        })
    }

    fn account_url(&self, account_id: &str, edge: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.api_version,
            account_id,
            edge
        )
    }

    /// POST a form and return the id from a successful response.
    async fn post_form(
        &self,
        phase: PublishPhase,
        url: String,
        form: &[(&str, &str)],
    ) -> Result<String, PublishError> {
        let response = self
            .http_client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| self.map_send_error(phase, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.map_send_error(phase, e))?;
        let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::Null);

        if status.is_client_error() || status.is_server_error() {
            let message = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .unwrap_or(FALLBACK_ERROR_MESSAGE);
            tracing::warn!(
                phase = %phase,
                status = %status,
                error = %message,
                "Graph API returned an error status"
            );
            return Err(PublishError::remote(phase, message));
        }

        extract_id(&body).ok_or_else(|| PublishError::missing_id(phase))
    }

    fn map_send_error(&self, phase: PublishPhase, err: reqwest::Error) -> PublishError {
        let err = err.without_url();
        if err.is_timeout() {
            PublishError::transport(
                phase,
                format!("request timed out after {}s", self.config.timeout.as_secs()),
            )
        } else {
            PublishError::transport(phase, err)
        }
    }
}

/// Graph ids are usually strings but are accepted as numbers too.
fn extract_id(body: &Value) -> Option<String> {
    let id = match body.get("id")? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!id.is_empty()).then_some(id)
}

#[async_trait]
impl MediaPublisher for InstagramGraph {
    async fn create_container(
        &self,
        credentials: &GraphCredentials,
        request: &ContainerRequest,
    ) -> Result<MediaContainer, PublishError> {
        let start = Instant::now();
        let url = self.account_url(&credentials.account_id, "media");

        let form: Vec<(&str, &str)> = match request.target {
            PublishTarget::Post => vec![
                ("image_url", request.image_url.as_str()),
                ("caption", request.caption.as_str()),
                ("access_token", credentials.access_token.as_str()),
            ],
            PublishTarget::Story => vec![
                ("image_url", request.image_url.as_str()),
                ("media_type", "STORIES"),
                ("access_token", credentials.access_token.as_str()),
            ],
        };

        let id = self
            .post_form(PublishPhase::CreateContainer, url, &form)
            .await?;

        tracing::info!(
            account_id = %credentials.account_id,
            target = request.target.as_str(),
            container_id = %id,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Media container created"
        );

        Ok(MediaContainer::new(id))
    }

    async fn publish_container(
        &self,
        credentials: &GraphCredentials,
        container: MediaContainer,
    ) -> Result<PublishedMedia, PublishError> {
        let start = Instant::now();
        let url = self.account_url(&credentials.account_id, "media_publish");
        let form = [
            ("creation_id", container.id()),
            ("access_token", credentials.access_token.as_str()),
        ];

        let post_id = self
            .post_form(PublishPhase::PublishContainer, url, &form)
            .await?;

        tracing::info!(
            account_id = %credentials.account_id,
            container_id = %container.id(),
            post_id = %post_id,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Media container published"
        );

        Ok(PublishedMedia {
            container_id: container.id().to_string(),
            post_id,
        })
    }
}
