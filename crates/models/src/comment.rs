use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub author: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_text(text: &str) -> Result<(), errors::ModelError> {
    if text.trim().is_empty() {
        return Err(errors::ModelError::Validation("text required".into()));
    }
    Ok(())
}

/// Build an unsaved comment with a fresh id and timestamps.
pub fn new_model(text: &str, author: Option<&str>) -> Result<Model, errors::ModelError> {
    validate_text(text)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    Ok(Model {
        id: Uuid::new_v4(),
        text: text.to_string(),
        author: author.map(str::to_string),
        created_at: now,
        updated_at: now,
    })
}

pub async fn create(db: &DatabaseConnection, text: &str, author: Option<&str>) -> Result<Model, errors::ModelError> {
    let m = new_model(text, author)?;
    let am = ActiveModel {
        id: Set(m.id),
        text: Set(m.text),
        author: Set(m.author),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All comments in whatever order the database returns them.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find().all(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Delete by id; returns the number of rows removed (0 when nothing matched).
pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
