//! Schema setup for the items table
//!
//! `CREATE TABLE IF NOT EXISTS` keeps a pre-existing table as-is, so the
//! `date` column type is checked afterwards. Queries bind dates as `DATE`.

use sqlx::PgPool;

/// Column type the item queries are written against
const EXPECTED_DATE_TYPE: &str = "date";

/// Schema setup error
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("items.date has type '{found}', expected 'date'; convert it with: ALTER TABLE items ALTER COLUMN date TYPE DATE USING date::date")]
    IncompatibleDateColumn { found: String },

    #[error("items table has no date column")]
    MissingDateColumn,
}

/// Create the items table and its date index if they don't exist.
pub async fn run(pool: &PgPool) -> Result<(), MigrationError> {
    tracing::info!("Running item migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            date DATE NOT NULL DEFAULT CURRENT_DATE
        )
        "#,
    )
    .execute(pool)
    .await?;

    let data_type: Option<String> = sqlx::query_scalar(
        r#"
        SELECT data_type::text
        FROM information_schema.columns
        WHERE table_schema = current_schema()
          AND table_name = 'items'
          AND column_name = 'date'
        "#,
    )
    .fetch_optional(pool)
    .await?;
    check_date_column(data_type.as_deref())?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_date ON items (date)")
        .execute(pool)
        .await?;

    tracing::info!("Item migrations complete");
    Ok(())
}

/// Verify the reported type of `items.date`.
fn check_date_column(data_type: Option<&str>) -> Result<(), MigrationError> {
    match data_type {
        Some(t) if t.eq_ignore_ascii_case(EXPECTED_DATE_TYPE) => Ok(()),
        Some(t) => Err(MigrationError::IncompatibleDateColumn {
            found: t.to_owned(),
        }),
        None => Err(MigrationError::MissingDateColumn),
    }
}
