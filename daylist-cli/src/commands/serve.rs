//! HTTP server command
//!
//! Connects to Postgres (or uses the in-memory store), ensures the schema
//! exists, then serves the to-do list until shutdown.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use daylist_server::db::{create_pool, migrations, ItemStore, MemoryItemStore, PgItemStore, PoolSettings};
use daylist_server::http::{run_server, ServerConfig};

use crate::config::{DbArgs, PoolArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory of static assets (served only if it exists)
    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Keep items in memory instead of Postgres (lost on exit)
    #[arg(long)]
    pub memory: bool,

    #[command(flatten)]
    pub db: DbArgs,

    #[command(flatten)]
    pub pool: PoolArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        let public_dir = if self.public_dir.is_dir() {
            Some(self.public_dir.clone())
        } else {
            tracing::debug!(
                public_dir = %self.public_dir.display(),
                "Public directory not found, static files disabled"
            );
            None
        };

        ServerConfig {
            bind_addr: SocketAddr::new(self.bind, self.port),
            public_dir,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();

    let store: Arc<dyn ItemStore> = if args.memory {
        tracing::warn!("Using in-memory store - items are lost on exit");
        Arc::new(MemoryItemStore::new())
    } else {
        let pool = connect(&args.db, PoolSettings::from(&args.pool)).await?;
        migrations::run(&pool)
            .await
            .context("Failed to create the items table")?;
        Arc::new(PgItemStore::new(pool))
    };

    tracing::info!("Starting daylist on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

/// Connect the pool, logging the failure before it ends the process.
pub(crate) async fn connect(db: &DbArgs, settings: PoolSettings) -> Result<sqlx::PgPool> {
    let options = db.connect_options()?;

    match create_pool(options, settings).await {
        Ok(pool) => {
            tracing::info!(target_db = %db.describe(), "Connected to the database");
            Ok(pool)
        }
        Err(e) => {
            tracing::error!(target_db = %db.describe(), "Failed to connect to the database: {}", e);
            Err(e).context("Failed to create database pool")
        }
    }
}
