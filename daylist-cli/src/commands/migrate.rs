//! Schema setup command
//!
//! Creates the items table without starting the server.

use anyhow::{Context, Result};
use clap::Parser;

use daylist_server::db::{migrations, PoolSettings};

use super::serve::connect;
use crate::config::{DbArgs, PoolArgs};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DbArgs,

    #[command(flatten)]
    pub pool: PoolArgs,
}

/// Create the items table and index if missing
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let settings = PoolSettings {
        max_connections: 1,
        ..PoolSettings::from(&args.pool)
    };
    let pool = connect(&args.db, settings).await?;

    migrations::run(&pool)
        .await
        .context("Failed to create the items table")?;

    pool.close().await;
    Ok(())
}
