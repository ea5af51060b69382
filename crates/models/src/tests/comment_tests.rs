use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::{comment, db::connect};

async fn db_or_skip() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = connect().await?;
    Migrator::up(&db, None).await?;
    Ok(Some(db))
}

#[tokio::test]
async fn test_create_list_and_delete_comment() -> Result<()> {
    let Some(db) = db_or_skip().await? else { return Ok(()); };

    let text = format!("comment_{}", Uuid::new_v4());
    let c = comment::create(&db, &text, Some("tester")).await?;

    let all = comment::find_all(&db).await?;
    assert!(all.iter().any(|x| x.id == c.id && x.text == text));

    let removed = comment::delete_by_id(&db, c.id).await?;
    assert_eq!(removed, 1);
    assert!(comment::Entity::find_by_id(c.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_delete_missing_comment_is_noop() -> Result<()> {
    let Some(db) = db_or_skip().await? else { return Ok(()); };

    let removed = comment::delete_by_id(&db, Uuid::new_v4()).await?;
    assert_eq!(removed, 0);
    Ok(())
}
