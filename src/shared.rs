use crate::{config::Config, error::Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait SharedTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;

    fn db(&self) -> &Self::Db;
}

pub struct Shared {
    database: DbConn,
}

impl Shared {
    pub async fn new() -> Result<Arc<Self>> {
        Self::connect(&Config::from_env()?).await
    }

    pub async fn connect(config: &Config) -> Result<Arc<Self>> {
        tracing::info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(config.database_url.clone());
        opts.max_connections(config.max_connections)
            .sqlx_logging(config.log_queries)
            .sqlx_logging_level(LevelFilter::Debug);

        let database = Database::connect(opts).await?;

        tracing::info!("Connected to database");

        Ok(Self::with_database(database))
    }

    pub fn with_database(database: DbConn) -> Arc<Self> {
        Arc::new(Self { database })
    }
}

impl SharedTrait for Arc<Shared> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }
}
