//! Instagram publish service
//!
//! Validation and credential lookup complete before the first remote call.
//! The two Graph API phases then run strictly in order; a phase-two failure
//! leaves the phase-one container in place and is reported as a failure.

use std::sync::Arc;
use std::time::Instant;

use social_os_core::{
    validate_publish_request, AppError, Config, PublishRequest, PublishResponse, PublishTarget,
};
use social_os_plugins::{ContainerRequest, GraphCredentials, MediaPublisher};

const MISSING_CREDENTIALS: &str =
    "Meta API credentials are missing. Set META_ACCESS_TOKEN and INSTAGRAM_BUSINESS_ACCOUNT_ID.";

#[derive(Clone)]
pub struct PublishService {
    config: Config,
    publisher: Arc<dyn MediaPublisher>,
}

impl PublishService {
    pub fn new(config: Config, publisher: Arc<dyn MediaPublisher>) -> Self {
        Self { config, publisher }
    }

    /// Resolve the account for `brand` (falling back to the default account)
    /// and the access token.
    fn credentials_for(&self, brand: Option<&str>) -> Result<GraphCredentials, AppError> {
        let access_token = self.config.meta_access_token();
        let account_id = self.config.instagram_account_for(brand);

        match (access_token, account_id) {
            (Some(access_token), Some(account_id)) => Ok(GraphCredentials {
                account_id: account_id.to_string(),
                access_token: access_token.to_string(),
            }),
            _ => Err(AppError::Config(MISSING_CREDENTIALS.to_string())),
        }
    }

    pub async fn publish(&self, request: PublishRequest) -> Result<PublishResponse, AppError> {
        let start = Instant::now();

        // 1. Validate
        let valid = validate_publish_request(&request)?;

        // 2. Credentials
        let credentials = self.credentials_for(request.brand.as_deref())?;

        tracing::info!(
            account_id = %credentials.account_id,
            brand = ?request.brand,
            target = request.target.as_str(),
            "Publishing to Instagram"
        );

        // 3. Phase one: create container
        let container = self
            .publisher
            .create_container(
                &credentials,
                &ContainerRequest {
                    image_url: valid.image_url,
                    caption: valid.caption,
                    target: request.target,
                },
            )
            .await?;

        // 4. Phase two: publish container
        let published = self
            .publisher
            .publish_container(&credentials, container)
            .await?;

        tracing::info!(
            account_id = %credentials.account_id,
            container_id = %published.container_id,
            post_id = %published.post_id,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Published to Instagram"
        );

        let detail = match request.target {
            PublishTarget::Post => "Post published successfully to Instagram.",
            PublishTarget::Story => "Story published successfully to Instagram.",
        };

        Ok(PublishResponse {
            success: true,
            target: request.target,
            media_id: published.container_id,
            instagram_post_id: published.post_id,
            detail: detail.to_string(),
        })
    }
}
