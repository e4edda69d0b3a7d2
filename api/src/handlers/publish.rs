//! Publish handler
//!
//! Side-effecting: forwards the converted post downstream and flips the
//! page's status property to the published value.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::PublishedPost;
use crate::domain::ports::NotionClient;
use crate::error::AppError;
use crate::AppState;

/// Request body for POST /api/publish
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    #[serde(default)]
    pub post_id: Option<String>,
}

/// Response body for POST /api/publish
#[derive(Serialize)]
pub struct PublishResponse {
    pub success: bool,
    pub message: String,
    pub post: PublishedPost,
}

/// POST /api/publish
pub async fn publish<N: NotionClient>(
    State(state): State<AppState<N>>,
    Json(body): Json<PublishRequest>,
) -> Result<Json<PublishResponse>, AppError> {
    let post_id = body
        .post_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Post ID is required".to_string()))?;

    let post = state.post_service.publish_post(&post_id).await?;

    Ok(Json(PublishResponse {
        success: true,
        message: "Post published successfully!".to_string(),
        post,
    }))
}
