use super::{projects, users};
use sea_orm::entity::prelude::*;
use sea_orm::{sea_query::ForeignKeyAction, QueryOrder, Set};
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_SUBMISSIONS: &str = "PK_submissions";
    pub const UC_SUBMISSIONS_MODEL: &str = "UC_submissions_model";
    pub const FK_SUBMISSIONS_PROJECT: &str = "FK_submissions_project";
    pub const FK_SUBMISSIONS_AUTHOR: &str = "FK_submissions_author";
    pub const CK_SUBMISSIONS_PREDICTIONS: &str = "CK_submissions_predictions";
}

/// Predicted values submitted by an author for a project, produced by a
/// model identified by its tag and revision.
///
/// An author may submit only once per `(project, model_tag, model_revision)`;
/// resubmitting requires a new revision.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_id: i32,
    pub author_id: i32,
    /// UTC time of the submission, filled in on insert when not given.
    #[sea_orm(column_type = "Text", nullable)]
    pub timestamp: Option<String>,
    /// Selects the submissions of one model under development.
    #[sea_orm(column_type = "Text")]
    pub model_tag: String,
    /// E.g. a commit hash, kept for reproducibility.
    #[sea_orm(column_type = "Text")]
    pub model_revision: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub predictions: Json,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Project,
    Author,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Project => Entity::belongs_to(projects::Entity)
                .from(Column::ProjectId)
                .to(projects::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Self::Author => Entity::belongs_to(users::Entity)
                .from(Column::AuthorId)
                .to(users::Column::Id)
                .on_delete(ForeignKeyAction::NoAction)
                .into(),
        }
    }
}

impl Related<projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.timestamp.is_not_set() {
            self.timestamp = Set(Some(crate::make_timestamp()));
        }

        Ok(self)
    }
}

impl Entity {
    #[inline]
    pub fn find_by_model(
        project_id: i32,
        author_id: i32,
        model_tag: &str,
        model_revision: &str,
    ) -> Select<Entity> {
        Self::find()
            .filter(Column::ProjectId.eq(project_id))
            .filter(Column::AuthorId.eq(author_id))
            .filter(Column::ModelTag.eq(model_tag))
            .filter(Column::ModelRevision.eq(model_revision))
    }

    #[inline]
    pub fn find_by_project(project_id: i32) -> Select<Entity> {
        Self::find()
            .filter(Column::ProjectId.eq(project_id))
            .order_by_asc(Column::Id)
    }

    #[inline]
    pub fn find_by_author(author_id: i32) -> Select<Entity> {
        Self::find()
            .filter(Column::AuthorId.eq(author_id))
            .order_by_asc(Column::Id)
    }

    /// Every revision of a model within a project, oldest first.
    #[inline]
    pub fn find_by_model_tag(project_id: i32, model_tag: &str) -> Select<Entity> {
        Self::find()
            .filter(Column::ProjectId.eq(project_id))
            .filter(Column::ModelTag.eq(model_tag))
            .order_by_asc(Column::Id)
    }
}
