mod utils;

pub use sea_orm_migration::prelude::*;

mod m20231002_101512_create_users_table;
mod m20231002_101845_create_categories_table;
mod m20231002_102230_create_projects_table;
mod m20231009_143017_create_submissions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231002_101512_create_users_table::Migration),
            Box::new(m20231002_101845_create_categories_table::Migration),
            Box::new(m20231002_102230_create_projects_table::Migration),
            Box::new(m20231009_143017_create_submissions_table::Migration),
        ]
    }
}
