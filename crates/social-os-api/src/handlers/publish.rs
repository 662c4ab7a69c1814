use std::sync::Arc;

use axum::{extract::State, Json};
use social_os_core::{PublishRequest, PublishResponse};

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

/// Publish to Instagram handler
///
/// Runs the two-phase Graph API publish. Repeating a call creates a new post.
#[tracing::instrument(
    skip(state, request),
    fields(target = request.target.as_str(), operation = "publish_post")
)]
pub async fn publish_post(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<PublishRequest>,
) -> Result<Json<PublishResponse>, HttpAppError> {
    let response = state.publish.publish(request).await?;
    Ok(Json(response))
}
