use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use tracing::{error, info};

use service::comment::Comment;

use crate::{errors::JsonApiError, state::ServerState};

pub const FETCH_FAILED: &str = "Failed to fetch comments";
pub const DELETE_FAILED: &str = "Failed to delete comment";
pub const DELETE_OK: &str = "Comment deleted successfully";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Comment routes relative to their mount point.
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list_comments))
        .route("/:id", delete(delete_comment))
}

#[utoipa::path(
    get, path = "/api/comments", tag = "comments",
    responses(
        (status = 200, description = "All comments", body = [crate::openapi::CommentDoc]),
        (status = 500, description = "Failed to fetch comments", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list_comments(State(state): State<ServerState>) -> Result<Json<Vec<Comment>>, JsonApiError> {
    match state.comments.list().await {
        Ok(list) => { info!(count = list.len(), "list comments"); Ok(Json(list)) }
        Err(e) => { error!(err = %e, "list comments failed"); Err(JsonApiError::internal(FETCH_FAILED)) }
    }
}

// The id is kept as a raw string: a malformed id must reach the store and come back as a 500.
#[utoipa::path(
    delete, path = "/api/comments/{id}", tag = "comments",
    params(("id" = String, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment deleted successfully (also when nothing matched)", body = crate::openapi::MessageDoc),
        (status = 500, description = "Failed to delete comment", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete_comment(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<MessageResponse>, JsonApiError> {
    match state.comments.delete(&id).await {
        Ok(()) => { info!(%id, "deleted comment"); Ok(Json(MessageResponse { message: DELETE_OK })) }
        Err(e) => { error!(%id, err = %e, "delete comment failed"); Err(JsonApiError::internal(DELETE_FAILED)) }
    }
}
