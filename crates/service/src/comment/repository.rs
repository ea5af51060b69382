use async_trait::async_trait;

use super::Comment;
use crate::errors::ServiceError;

/// Store contract for comments.
///
/// `delete_by_id` takes the id exactly as it arrived on the wire; rejecting a
/// malformed id is the store's job and surfaces as an error.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Comment>, ServiceError>;
    /// Returns the number of records removed; zero when nothing matched.
    async fn delete_by_id(&self, id: &str) -> Result<u64, ServiceError>;
}

/// In-memory repositories for tests and local runs without a database
pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    use crate::comment::parse_comment_id;

    /// Keeps comments in insertion order.
    #[derive(Default)]
    pub struct InMemoryCommentRepository {
        comments: RwLock<Vec<Comment>>,
    }

    impl InMemoryCommentRepository {
        pub fn with_comments(comments: Vec<Comment>) -> Self {
            Self { comments: RwLock::new(comments) }
        }

        pub async fn insert(&self, text: &str, author: Option<&str>) -> Result<Comment, ServiceError> {
            let c = models::comment::new_model(text, author)?;
            self.comments.write().await.push(c.clone());
            Ok(c)
        }

        pub async fn len(&self) -> usize {
            self.comments.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.comments.read().await.is_empty()
        }
    }

    #[async_trait]
    impl CommentRepository for InMemoryCommentRepository {
        async fn find_all(&self) -> Result<Vec<Comment>, ServiceError> {
            Ok(self.comments.read().await.clone())
        }

        async fn delete_by_id(&self, id: &str) -> Result<u64, ServiceError> {
            let id = parse_comment_id(id)?;
            let mut comments = self.comments.write().await;
            let before = comments.len();
            comments.retain(|c| c.id != id);
            Ok((before - comments.len()) as u64)
        }
    }

    /// Fails every call, standing in for a store that cannot be reached.
    #[derive(Default)]
    pub struct UnavailableCommentRepository;

    #[async_trait]
    impl CommentRepository for UnavailableCommentRepository {
        async fn find_all(&self) -> Result<Vec<Comment>, ServiceError> {
            Err(ServiceError::Db("store unavailable".into()))
        }

        async fn delete_by_id(&self, _id: &str) -> Result<u64, ServiceError> {
            Err(ServiceError::Db("store unavailable".into()))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn find_all_keeps_insertion_order() -> Result<(), anyhow::Error> {
            let repo = InMemoryCommentRepository::default();
            assert!(repo.find_all().await?.is_empty());

            let a = repo.insert("first", None).await?;
            let b = repo.insert("second", Some("bob")).await?;
            let all = repo.find_all().await?;
            assert_eq!(all, vec![a, b]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_reports_rows_removed() -> Result<(), anyhow::Error> {
            let repo = InMemoryCommentRepository::default();
            let a = repo.insert("keep", None).await?;
            let b = repo.insert("drop", None).await?;

            assert_eq!(repo.delete_by_id(&b.id.to_string()).await?, 1);
            assert_eq!(repo.delete_by_id(&b.id.to_string()).await?, 0);
            assert_eq!(repo.find_all().await?, vec![a]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_rejects_malformed_id() {
            let repo = InMemoryCommentRepository::default();
            let err = repo.delete_by_id("12345").await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidId(_)));
        }

        #[tokio::test]
        async fn delete_rejects_padded_id_and_keeps_record() -> Result<(), anyhow::Error> {
            let repo = InMemoryCommentRepository::default();
            let c = repo.insert("padded", None).await?;

            let err = repo.delete_by_id(&format!(" {} ", c.id)).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidId(_)));
            assert_eq!(repo.len().await, 1);
            Ok(())
        }

        #[tokio::test]
        async fn with_comments_serves_given_records() -> Result<(), anyhow::Error> {
            let a = models::comment::new_model("seeded a", None)?;
            let b = models::comment::new_model("seeded b", Some("eve"))?;
            let repo = InMemoryCommentRepository::with_comments(vec![a.clone(), b.clone()]);

            assert_eq!(repo.find_all().await?, vec![a.clone(), b]);
            assert_eq!(repo.delete_by_id(&a.id.to_string()).await?, 1);
            assert_eq!(repo.len().await, 1);
            Ok(())
        }

        #[tokio::test]
        async fn unavailable_store_always_errors() {
            let repo = UnavailableCommentRepository;
            assert!(matches!(repo.find_all().await, Err(ServiceError::Db(_))));
            assert!(repo.delete_by_id("anything").await.is_err());
        }
    }
}
