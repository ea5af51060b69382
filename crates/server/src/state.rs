use std::sync::Arc;

use service::comment::{repository::CommentRepository, service::CommentService};

/// Shared handler state. The comment store is injected by whoever builds the router.
#[derive(Clone)]
pub struct ServerState {
    pub comments: CommentService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { comments: CommentService::new(repo) }
    }
}
