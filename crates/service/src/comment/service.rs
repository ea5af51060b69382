use std::sync::Arc;

use tracing::{debug, instrument};

use super::repository::CommentRepository;
use super::Comment;
use crate::errors::ServiceError;

/// Comment operations exposed to the HTTP layer.
///
/// Holds whichever store it is given; there is no global lookup.
#[derive(Clone)]
pub struct CommentService {
    repo: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self { Self { repo } }

    /// Every stored comment, in store order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Comment>, ServiceError> {
        self.repo.find_all().await
    }

    /// Delete a comment by its raw id.
    ///
    /// Succeeds whether or not a comment matched.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::comment::{repository::mock::InMemoryCommentRepository, service::CommentService};
    /// let svc = CommentService::new(Arc::new(InMemoryCommentRepository::default()));
    /// let missing = uuid::Uuid::new_v4().to_string();
    /// assert!(tokio_test::block_on(svc.delete(&missing)).is_ok());
    /// assert!(tokio_test::block_on(svc.delete("not-a-uuid")).is_err());
    /// ```
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let removed = self.repo.delete_by_id(id).await?;
        if removed == 0 {
            debug!(%id, "delete matched no comment");
        }
        Ok(())
    }
}
