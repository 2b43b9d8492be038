use super::utils::drop_table_down;
use entity::{
    projects,
    submissions::{self, constraints::*},
    users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(submissions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(submissions::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::AuthorId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(submissions::Column::Timestamp).text().null())
                    .col(
                        ColumnDef::new(submissions::Column::ModelTag)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::ModelRevision)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(submissions::Column::Comment).text().null())
                    .col(
                        ColumnDef::new(submissions::Column::Predictions)
                            .json()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_SUBMISSIONS)
                            .col(submissions::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_SUBMISSIONS_MODEL)
                            .col(submissions::Column::ProjectId)
                            .col(submissions::Column::AuthorId)
                            .col(submissions::Column::ModelTag)
                            .col(submissions::Column::ModelRevision)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSIONS_PROJECT)
                            .from(submissions::Entity, submissions::Column::ProjectId)
                            .to(projects::Entity, projects::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSIONS_AUTHOR)
                            .from(submissions::Entity, submissions::Column::AuthorId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // A JSON `null` literal counts as missing predictions.
        manager
            .get_connection()
            .execute_unprepared(&format!(
                r#"ALTER TABLE "submissions" ADD CONSTRAINT "{CK_SUBMISSIONS_PREDICTIONS}" CHECK (json_typeof("predictions") <> 'null')"#
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table_down!(manager, submissions::Entity)
    }
}
