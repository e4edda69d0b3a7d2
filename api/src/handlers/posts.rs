//! Post handlers
//!
//! Feed listing and single-post preview.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::domain::entities::{PostDetail, PostSummary};
use crate::domain::ports::NotionClient;
use crate::error::AppError;
use crate::AppState;

/// Response body for GET /api/posts
#[derive(Serialize)]
pub struct ListPostsResponse {
    pub success: bool,
    pub posts: Vec<PostSummary>,
}

/// GET /api/posts
///
/// Posts ready to publish, newest first.
pub async fn list_posts<N: NotionClient>(
    State(state): State<AppState<N>>,
) -> Result<Json<ListPostsResponse>, AppError> {
    let posts = state.post_service.list_posts().await?;

    Ok(Json(ListPostsResponse {
        success: true,
        posts,
    }))
}

/// Response body for GET /api/posts/:id
#[derive(Serialize)]
pub struct GetPostResponse {
    pub success: bool,
    pub post: PostDetail,
}

/// GET /api/posts/:id
///
/// One post with its markdown body and rendered display fragment.
pub async fn get_post<N: NotionClient>(
    State(state): State<AppState<N>>,
    Path(id): Path<String>,
) -> Result<Json<GetPostResponse>, AppError> {
    let post = state.post_service.get_post(&id).await?;

    Ok(Json(GetPostResponse {
        success: true,
        post,
    }))
}
