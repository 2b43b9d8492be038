use crate::error::{self, Result};
use std::{env, str::FromStr};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub log_queries: bool,
}

impl Config {
    /// Reads the configuration from the process environment, loading `.env`
    /// first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(error::MISSING_DATABASE_URL)?;

        Ok(Self {
            database_url,
            max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            log_queries: parse_or(&lookup, "DATABASE_LOG_QUERIES", false)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| {
            tracing::error!("invalid value for {key}: {value:?}");
            error::INVALID_CONFIG
        }),
        None => Ok(default),
    }
}
