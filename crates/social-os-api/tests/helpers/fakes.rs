//! In-process stand-ins for the AI model and the Graph API.

use async_trait::async_trait;
use social_os_core::ImageContentType;
use social_os_plugins::{
    ContainerRequest, GraphCredentials, InferenceError, MediaContainer, MediaPublisher,
    PublishError, PublishPhase, PublishedMedia, VisionModel, VisionRequest,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Vision model returning a canned reply.
pub struct FakeVision {
    reply: Result<String, String>,
    configured: bool,
    calls: AtomicUsize,
    seen: Mutex<Vec<(ImageContentType, Vec<u8>)>>,
}

impl FakeVision {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            configured: true,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Simulates the provider answering with an error status.
    pub fn failing(remote_message: &str) -> Self {
        Self {
            reply: Err(remote_message.to_string()),
            ..Self::replying("")
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::replying("")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(ImageContentType, Vec<u8>)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl VisionModel for FakeVision {
    fn check_configured(&self) -> Result<(), InferenceError> {
        if self.configured {
            Ok(())
        } else {
            Err(InferenceError::MissingApiKey)
        }
    }

    async fn generate(&self, request: VisionRequest<'_>) -> Result<String, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((request.content_type, request.image.to_vec()));
        self.reply.clone().map_err(InferenceError::Remote)
    }
}

/// What a fake Graph API phase answers.
#[derive(Debug, Clone)]
pub enum RemoteOutcome {
    /// Success with this id.
    Id(String),
    /// Success status but no id in the body.
    MissingId,
    /// Error status with this remote message.
    Remote(String),
}

impl RemoteOutcome {
    fn resolve(&self, phase: PublishPhase) -> Result<String, PublishError> {
        match self {
            RemoteOutcome::Id(id) => Ok(id.clone()),
            RemoteOutcome::MissingId => Err(PublishError::missing_id(phase)),
            RemoteOutcome::Remote(message) => Err(PublishError::remote(phase, message)),
        }
    }
}

/// Media publisher scripted per phase.
pub struct FakePublisher {
    create: RemoteOutcome,
    publish: RemoteOutcome,
    create_calls: AtomicUsize,
    publish_calls: AtomicUsize,
    requests: Mutex<Vec<(GraphCredentials, ContainerRequest)>>,
}

impl FakePublisher {
    pub fn new(create: RemoteOutcome, publish: RemoteOutcome) -> Self {
        Self {
            create,
            publish,
            create_calls: AtomicUsize::new(0),
            publish_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Both phases succeed with `container-1` / `post-1`.
    pub fn succeeding() -> Self {
        Self::new(
            RemoteOutcome::Id("container-1".to_string()),
            RemoteOutcome::Id("post-1".to_string()),
        )
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn publish_calls(&self) -> usize {
        self.publish_calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(GraphCredentials, ContainerRequest)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaPublisher for FakePublisher {
    async fn create_container(
        &self,
        credentials: &GraphCredentials,
        request: &ContainerRequest,
    ) -> Result<MediaContainer, PublishError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((credentials.clone(), request.clone()));
        self.create
            .resolve(PublishPhase::CreateContainer)
            .map(MediaContainer::new)
    }

    async fn publish_container(
        &self,
        _credentials: &GraphCredentials,
        container: MediaContainer,
    ) -> Result<PublishedMedia, PublishError> {
        self.publish_calls.fetch_add(1, Ordering::SeqCst);
        let post_id = self.publish.resolve(PublishPhase::PublishContainer)?;
        Ok(PublishedMedia {
            container_id: container.id().to_string(),
            post_id,
        })
    }
}
