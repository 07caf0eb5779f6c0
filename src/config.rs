use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = var("DATABASE_URL")
            .unwrap_or_else(|| "postgres://localhost:5432/FoodDatabase".into());
        let host = var("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&var, "APP_PORT", 8080)?;
        let db_max_connections = parse_or(&var, "DB_MAX_CONNECTIONS", 10)?;
        let db_timeout = Duration::from_secs(parse_or(&var, "DB_TIMEOUT_SECS", 5)?);
        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            db_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(v) => v.trim().parse::<T>().with_context(|| format!("invalid {key}: {v:?}")),
        None => Ok(default),
    }
}
