use super::utils::drop_table_down;
use entity::users::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(users::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(users::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(users::Column::Created).text().null())
                    .col(ColumnDef::new(users::Column::Name).text().not_null())
                    .col(ColumnDef::new(users::Column::EmailAddr).text().not_null())
                    .col(ColumnDef::new(users::Column::Fullname).text().not_null())
                    .col(ColumnDef::new(users::Column::Locale).text().not_null())
                    .primary_key(Index::create().name(PK_USERS).col(users::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_USERS_NAME)
                            .col(users::Column::Name)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_USERS_EMAIL_ADDR)
                            .col(users::Column::EmailAddr)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table_down!(manager, users::Entity)
    }
}
