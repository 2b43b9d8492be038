use super::utils::drop_table_down;
use entity::categories::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(categories::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(categories::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(categories::Column::Created).text().null())
                    .col(ColumnDef::new(categories::Column::Name).text().not_null())
                    .col(
                        ColumnDef::new(categories::Column::ShortName)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(categories::Column::Description)
                            .text()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_CATEGORIES)
                            .col(categories::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_CATEGORIES_NAME)
                            .col(categories::Column::Name)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_CATEGORIES_SHORT_NAME)
                            .col(categories::Column::ShortName)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table_down!(manager, categories::Entity)
    }
}
