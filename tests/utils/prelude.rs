#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{db::Database, fixtures::*};
pub use assert_json_diff::assert_json_eq;
pub use crowdsourcing_backend::{
    error::{self, DatabaseError},
    submissions, NewSubmission, SharedTrait,
};
pub use entity::{categories, projects, users};
pub use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, EntityTrait, ModelTrait, Set, TransactionTrait,
};
pub use serde_json::{json, Value};
