use super::macros::enable_logging;
use crowdsourcing_backend::Shared;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, DbConn};
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tracing::log::LevelFilter;

/// A migrated Postgres database living as long as this value.
pub struct Database {
    conn: DbConn,
    _container: ContainerAsync<Postgres>,
}

impl Database {
    pub async fn setup() -> Self {
        enable_logging!(WARN);

        let container = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .expect("failed to start postgres container");

        let url = format!(
            "postgres://postgres:postgres@{}:{}/postgres",
            container.get_host().await.unwrap(),
            container.get_host_port_ipv4(5432).await.unwrap(),
        );

        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let conn = sea_orm::Database::connect(opts)
            .await
            .expect("failed to connect to database");

        migration::Migrator::fresh(&conn)
            .await
            .expect("failed to apply migrations");

        Self {
            conn,
            _container: container,
        }
    }

    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    #[allow(unused)]
    pub fn shared(&self) -> Arc<Shared> {
        Shared::with_database(self.conn.clone())
    }
}
