use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::comment::repository::CommentRepository;
use crate::comment::{parse_comment_id, Comment};
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCommentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn find_all(&self) -> Result<Vec<Comment>, ServiceError> {
        let rows = models::comment::find_all(&self.db).await?;
        Ok(rows)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, ServiceError> {
        let id = parse_comment_id(id)?;
        let removed = models::comment::delete_by_id(&self.db, id).await?;
        debug!(%id, removed, "comment delete executed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_repository_list_and_delete() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };
        let repo = SeaOrmCommentRepository::new(db.clone());

        let c = models::comment::create(&db, "repository test", None).await?;
        let listed = repo.find_all().await?;
        assert!(listed.iter().any(|x| x.id == c.id));

        assert_eq!(repo.delete_by_id(&c.id.to_string()).await?, 1);
        assert_eq!(repo.delete_by_id(&c.id.to_string()).await?, 0);
        let listed = repo.find_all().await?;
        assert!(listed.iter().all(|x| x.id != c.id));
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_rejects_malformed_id() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };
        let repo = SeaOrmCommentRepository::new(db);
        assert!(matches!(repo.delete_by_id("zzz").await, Err(ServiceError::InvalidId(_))));
        Ok(())
    }
}
