use crate::{
    error::{self, DatabaseError, Result},
    utils::set_option,
};
use entity::{
    projects,
    submissions::{self, constraints::*},
    users,
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use serde_json::Value;

/// A submission that has not been persisted yet.
///
/// `predictions` may be any JSON value except `null`; its shape is up to the
/// project.
#[derive(Clone, Debug, PartialEq)]
pub struct NewSubmission {
    project_id: i32,
    author_id: i32,
    model_tag: String,
    model_revision: String,
    predictions: Value,
    comment: Option<String>,
    timestamp: Option<String>,
}

impl NewSubmission {
    pub fn new(
        project_id: i32,
        author_id: i32,
        model_tag: impl Into<String>,
        model_revision: impl Into<String>,
        predictions: impl Into<Value>,
    ) -> Self {
        Self {
            project_id,
            author_id,
            model_tag: model_tag.into(),
            model_revision: model_revision.into(),
            predictions: predictions.into(),
            comment: None,
            timestamp: None,
        }
    }

    pub fn from_models(
        project: &projects::Model,
        author: &users::Model,
        model_tag: impl Into<String>,
        model_revision: impl Into<String>,
        predictions: impl Into<Value>,
    ) -> Self {
        Self::new(project.id, author.id, model_tag, model_revision, predictions)
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Overrides the current time set on insert.
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Fields may still be changed on the returned model before [`insert`].
    pub fn into_active_model(self) -> submissions::ActiveModel {
        submissions::ActiveModel {
            project_id: Set(self.project_id),
            author_id: Set(self.author_id),
            timestamp: set_option(self.timestamp.map(Some)),
            model_tag: Set(self.model_tag),
            model_revision: Set(self.model_revision),
            comment: Set(self.comment),
            predictions: Set(self.predictions),
            ..Default::default()
        }
    }
}

/// Persists a submission that the caller may have modified after building it.
///
/// Unset columns are left out of the insert, so a missing project, author,
/// model tag, model revision or predictions is rejected by the database. JSON
/// `null` predictions are rejected the same way.
pub async fn insert<C>(conn: &C, submission: submissions::ActiveModel) -> Result<submissions::Model>
where
    C: ConnectionTrait,
{
    let result = submission.insert(conn).await;

    match result {
        Err(err) if err.unique_violation(UC_SUBMISSIONS_MODEL) => {
            tracing::warn!("duplicate submission, the model revision must change");
            Err(error::DUPLICATE_SUBMISSION)
        }
        Err(err) if err.foreign_key_violation(FK_SUBMISSIONS_PROJECT) => {
            Err(error::PROJECT_NOT_FOUND)
        }
        Err(err) if err.foreign_key_violation(FK_SUBMISSIONS_AUTHOR) => {
            Err(error::AUTHOR_NOT_FOUND)
        }
        Err(err) if err.check_violation(CK_SUBMISSIONS_PREDICTIONS) => {
            Err(error::MISSING_FIELD)
        }
        Err(err) => Err(err.into()),
        Ok(model) => {
            tracing::debug!(
                id = model.id,
                project_id = model.project_id,
                author_id = model.author_id,
                "submission created"
            );
            Ok(model)
        }
    }
}

#[inline]
pub async fn create<C>(conn: &C, submission: NewSubmission) -> Result<submissions::Model>
where
    C: ConnectionTrait,
{
    insert(conn, submission.into_active_model()).await
}

pub async fn find<C>(conn: &C, id: i32) -> Result<Option<submissions::Model>>
where
    C: ConnectionTrait,
{
    Ok(submissions::Entity::find_by_id(id).one(conn).await?)
}

pub async fn find_by_model<C>(
    conn: &C,
    project_id: i32,
    author_id: i32,
    model_tag: &str,
    model_revision: &str,
) -> Result<Option<submissions::Model>>
where
    C: ConnectionTrait,
{
    let submission =
        submissions::Entity::find_by_model(project_id, author_id, model_tag, model_revision)
            .one(conn)
            .await?;

    Ok(submission)
}

pub async fn list_for_author<C>(conn: &C, author_id: i32) -> Result<Vec<submissions::Model>>
where
    C: ConnectionTrait,
{
    Ok(submissions::Entity::find_by_author(author_id)
        .all(conn)
        .await?)
}

pub async fn list_for_project<C>(conn: &C, project_id: i32) -> Result<Vec<submissions::Model>>
where
    C: ConnectionTrait,
{
    Ok(submissions::Entity::find_by_project(project_id)
        .all(conn)
        .await?)
}

pub async fn list_for_model_tag<C>(
    conn: &C,
    project_id: i32,
    model_tag: &str,
) -> Result<Vec<submissions::Model>>
where
    C: ConnectionTrait,
{
    Ok(submissions::Entity::find_by_model_tag(project_id, model_tag)
        .all(conn)
        .await?)
}

/// Returns whether a submission with this id existed.
pub async fn delete<C>(conn: &C, id: i32) -> Result<bool>
where
    C: ConnectionTrait,
{
    let result = submissions::Entity::delete_by_id(id).exec(conn).await?;

    if result.rows_affected == 0 {
        return Ok(false);
    }

    tracing::debug!(id, "submission deleted");

    Ok(true)
}
