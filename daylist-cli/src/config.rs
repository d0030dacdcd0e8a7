//! Database and pool settings shared by every command
//!
//! Values come from flags or the environment (`.env` is loaded before
//! parsing). `DATABASE_URL` wins over the individual `DB_*` variables.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use daylist_server::db::PoolSettings;
use sqlx::postgres::PgConnectOptions;

/// Database connection arguments
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Full connection URL (overrides the DB_* settings)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database name
    #[arg(long, env = "DB_DATABASE")]
    pub db_database: Option<String>,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,
}

impl DbArgs {
    /// Build connect options from the URL or the individual settings.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        if let Some(url) = &self.database_url {
            return url
                .parse::<PgConnectOptions>()
                .context("DATABASE_URL is not a valid postgres connection string");
        }

        let mut options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port);
        if let Some(user) = &self.db_user {
            options = options.username(user);
        }
        if let Some(password) = &self.db_password {
            options = options.password(password);
        }
        if let Some(database) = &self.db_database {
            options = options.database(database);
        }
        Ok(options)
    }

    /// Connection target for log lines (never includes the password).
    pub fn describe(&self) -> String {
        match &self.database_url {
            Some(_) => "DATABASE_URL".to_owned(),
            None => format!(
                "{}:{}/{}",
                self.db_host,
                self.db_port,
                self.db_database.as_deref().unwrap_or("")
            ),
        }
    }
}

/// Connection pool arguments
#[derive(Args, Debug, Clone)]
pub struct PoolArgs {
    /// Maximum connections held by the pool
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds to wait for a free connection before failing a request
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT", default_value_t = 30)]
    pub acquire_timeout: u64,
}

impl From<&PoolArgs> for PoolSettings {
    fn from(args: &PoolArgs) -> Self {
        Self {
            max_connections: args.max_connections,
            acquire_timeout: Duration::from_secs(args.acquire_timeout),
        }
    }
}
