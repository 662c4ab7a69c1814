//! Two-phase media publishing abstraction
//!
//! Publishing is a strict sequence: a media container is created from an
//! image URL, then that container is published. A [`PublishedMedia`] can only
//! be obtained by handing a [`MediaContainer`] to
//! [`MediaPublisher::publish_container`], so phase two cannot run without the
//! id returned by phase one. Nothing is rolled back when phase two fails.

use async_trait::async_trait;
use social_os_core::{AppError, PublishTarget};
use std::fmt;

/// Which half of the publish sequence failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishPhase {
    CreateContainer,
    PublishContainer,
}

impl PublishPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishPhase::CreateContainer => "create_container",
            PublishPhase::PublishContainer => "publish_container",
        }
    }

    fn failure_prefix(&self) -> &'static str {
        match self {
            PublishPhase::CreateContainer => "Failed creating media container",
            PublishPhase::PublishContainer => "Failed publishing media",
        }
    }

    fn missing_id_message(&self) -> &'static str {
        match self {
            PublishPhase::CreateContainer => "Meta API did not return media container id.",
            PublishPhase::PublishContainer => "Meta API did not return published post id.",
        }
    }
}

impl fmt::Display for PublishPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct PublishError {
    pub phase: PublishPhase,
    pub message: String,
}

impl PublishError {
    /// The Graph API answered with an error status.
    pub fn remote(phase: PublishPhase, remote_message: &str) -> Self {
        Self {
            phase,
            message: format!("{}: {}", phase.failure_prefix(), remote_message),
        }
    }

    /// The call succeeded but carried no usable id.
    pub fn missing_id(phase: PublishPhase) -> Self {
        Self {
            phase,
            message: phase.missing_id_message().to_string(),
        }
    }

    /// The call did not complete (timeout, connection failure).
    pub fn transport(phase: PublishPhase, detail: impl fmt::Display) -> Self {
        Self {
            phase,
            message: format!("{}: {}", phase.failure_prefix(), detail),
        }
    }
}

impl From<PublishError> for AppError {
    fn from(err: PublishError) -> Self {
        AppError::Upstream(err.message)
    }
}

/// Account and token a publish runs under. Never logged.
#[derive(Clone)]
pub struct GraphCredentials {
    pub account_id: String,
    pub access_token: String,
}

impl fmt::Debug for GraphCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphCredentials")
            .field("account_id", &self.account_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Phase one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRequest {
    pub image_url: String,
    pub caption: String,
    pub target: PublishTarget,
}

/// A created, not yet published, remote media container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaContainer {
    id: String,
}

impl MediaContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A published post and the container it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMedia {
    pub container_id: String,
    pub post_id: String,
}

#[async_trait]
pub trait MediaPublisher: Send + Sync {
    /// Phase one: stage the image (and caption, for posts) remotely.
    async fn create_container(
        &self,
        credentials: &GraphCredentials,
        request: &ContainerRequest,
    ) -> Result<MediaContainer, PublishError>;

    /// Phase two: publish a container created by phase one.
    async fn publish_container(
        &self,
        credentials: &GraphCredentials,
        container: MediaContainer,
    ) -> Result<PublishedMedia, PublishError>;
}
