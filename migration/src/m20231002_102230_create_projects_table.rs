use super::utils::drop_table_down;
use entity::{
    categories,
    projects::{self, constraints::*},
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
                    .table(projects::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(projects::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(projects::Column::Created).text().null())
                    .col(ColumnDef::new(projects::Column::Name).text().not_null())
                    .col(
                        ColumnDef::new(projects::Column::ShortName)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(projects::Column::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(projects::Column::OwnerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(projects::Column::CategoryId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_PROJECTS)
                            .col(projects::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_PROJECTS_NAME)
                            .col(projects::Column::Name)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_PROJECTS_SHORT_NAME)
                            .col(projects::Column::ShortName)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROJECTS_OWNER)
                            .from(projects::Entity, projects::Column::OwnerId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROJECTS_CATEGORY)
                            .from(projects::Entity, projects::Column::CategoryId)
                            .to(categories::Entity, categories::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table_down!(manager, projects::Entity)
    }
}
