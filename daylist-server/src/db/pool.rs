//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and an acquire timeout so
//! a saturated pool surfaces as an error instead of a hung request.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool sizing options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Create a PostgreSQL connection pool.
///
/// Connects eagerly, so an unreachable database fails here rather than on
/// the first request.
///
/// # Example
///
/// ```ignore
/// let options: PgConnectOptions = "postgres://localhost/daylist".parse()?;
/// let pool = create_pool(options, PoolSettings::default()).await?;
/// ```
pub async fn create_pool(
    options: PgConnectOptions,
    settings: PoolSettings,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections.max(1))
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await
}
