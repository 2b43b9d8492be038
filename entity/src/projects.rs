use super::{categories, submissions, users};
use sea_orm::entity::prelude::*;
use sea_orm::{sea_query::ForeignKeyAction, Set};
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_PROJECTS: &str = "PK_projects";
    pub const UC_PROJECTS_NAME: &str = "UC_projects_name";
    pub const UC_PROJECTS_SHORT_NAME: &str = "UC_projects_short_name";
    pub const FK_PROJECTS_OWNER: &str = "FK_projects_owner";
    pub const FK_PROJECTS_CATEGORY: &str = "FK_projects_category";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub created: Option<String>,
    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", unique)]
    pub short_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub owner_id: i32,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Owner,
    Category,
    Submissions,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Owner => Entity::belongs_to(users::Entity)
                .from(Column::OwnerId)
                .to(users::Column::Id)
                .on_delete(ForeignKeyAction::NoAction)
                .into(),
            Self::Category => Entity::belongs_to(categories::Entity)
                .from(Column::CategoryId)
                .to(categories::Column::Id)
                .on_delete(ForeignKeyAction::NoAction)
                .into(),
            Self::Submissions => Entity::has_many(submissions::Entity).into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.created.is_not_set() {
            self.created = Set(Some(crate::make_timestamp()));
        }

        Ok(self)
    }
}
