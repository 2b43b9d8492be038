use super::{projects, submissions};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_USERS: &str = "PK_users";
    pub const UC_USERS_NAME: &str = "UC_users_name";
    pub const UC_USERS_EMAIL_ADDR: &str = "UC_users_email_addr";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub created: Option<String>,
    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", unique)]
    pub email_addr: String,
    #[sea_orm(column_type = "Text")]
    pub fullname: String,
    #[sea_orm(column_type = "Text")]
    pub locale: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Projects,
    Submissions,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Projects => Entity::has_many(projects::Entity).into(),
            Self::Submissions => Entity::has_many(submissions::Entity).into(),
        }
    }
}

impl Related<projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
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
