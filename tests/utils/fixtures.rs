use entity::{categories, projects, users};
use sea_orm::{ActiveModelTrait, DbConn, Set};

pub async fn create_user(db: &DbConn, name: &str) -> users::Model {
    users::ActiveModel {
        name: Set(name.to_owned()),
        email_addr: Set(format!("{name}@example.com")),
        fullname: Set(name.to_owned()),
        locale: Set("en".to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to create user")
}

pub async fn create_category(db: &DbConn, name: &str) -> categories::Model {
    categories::ActiveModel {
        name: Set(name.to_owned()),
        short_name: Set(name.to_owned()),
        description: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to create category")
}

pub async fn create_project(
    db: &DbConn,
    short_name: &str,
    owner: &users::Model,
    category: &categories::Model,
) -> projects::Model {
    projects::ActiveModel {
        name: Set(format!("Project {short_name}")),
        short_name: Set(short_name.to_owned()),
        description: Set("desc".to_owned()),
        owner_id: Set(owner.id),
        category_id: Set(category.id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to create project")
}

pub struct Fixture {
    pub user: users::Model,
    pub category: categories::Model,
    pub project: projects::Model,
}

/// The user `johndoe` owning the project `app` in the category `cat`.
pub async fn setup_project(db: &DbConn) -> Fixture {
    let user = users::ActiveModel {
        name: Set("johndoe".to_owned()),
        email_addr: Set("john.doe@example.com".to_owned()),
        fullname: Set("John Doe".to_owned()),
        locale: Set("en".to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to create user");

    let category = create_category(db, "cat").await;
    let project = create_project(db, "app", &user, &category).await;

    Fixture {
        user,
        category,
        project,
    }
}
