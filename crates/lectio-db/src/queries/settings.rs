//! Database query functions for the `settings` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

/// Set a setting, overwriting any previous value.
pub async fn set_setting(pool: &PgPool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO settings (key, value) VALUES ($1, $2) \
         ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await
    .with_context(|| format!("failed to set setting {key:?}"))?;

    Ok(())
}

/// Fetch a setting value, or `None` if the key has never been set.
pub async fn get_setting(pool: &PgPool, key: &str) -> Result<Option<String>> {
    let row: Option<(String,)> = sqlx::query_as("SELECT value FROM settings WHERE key = $1")
        .bind(key)
        .fetch_optional(pool)
        .await
        .with_context(|| format!("failed to fetch setting {key:?}"))?;

    Ok(row.map(|(value,)| value))
}
