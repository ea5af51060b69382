//! Create `comment` table.
//!
//! Ids are generated by the application, not by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(uuid(Comment::Id).primary_key())
                    .col(text(Comment::Text).not_null())
                    .col(string_len_null(Comment::Author, 128))
                    .col(timestamp_with_time_zone(Comment::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Comment::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Comment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Comment { Table, Id, Text, Author, CreatedAt, UpdatedAt }
