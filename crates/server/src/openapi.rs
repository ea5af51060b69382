use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Shape of a stored comment as returned by the list endpoint.
#[derive(ToSchema)]
pub struct CommentDoc {
    pub id: Uuid,
    pub text: String,
    pub author: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::comments::list_comments,
        crate::routes::comments::delete_comment,
    ),
    components(
        schemas(
            HealthResponse,
            CommentDoc,
            MessageDoc,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "comments")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_comment_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/comments"));
        assert!(doc.paths.paths.contains_key("/api/comments/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
