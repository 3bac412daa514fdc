//! Database query functions for the `reading_progress` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::ProgressEntry;

/// Record a plan day as completed.
///
/// Idempotent: marking an already-completed day again is a no-op and does
/// not touch the original `completed_at` timestamp.
pub async fn mark_day_complete(pool: &PgPool, day: i32) -> Result<()> {
    sqlx::query(
        "INSERT INTO reading_progress (day) VALUES ($1) \
         ON CONFLICT (day) DO NOTHING",
    )
    .bind(day)
    .execute(pool)
    .await
    .with_context(|| format!("failed to mark day {day} complete"))?;

    Ok(())
}

/// All completed day numbers, in ascending order.
pub async fn list_completed_days(pool: &PgPool) -> Result<Vec<i32>> {
    let rows: Vec<(i32,)> =
        sqlx::query_as("SELECT day FROM reading_progress ORDER BY day")
            .fetch_all(pool)
            .await
            .context("failed to list completed days")?;

    Ok(rows.into_iter().map(|(day,)| day).collect())
}

/// Number of completed days.
pub async fn completed_count(pool: &PgPool) -> Result<i64> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reading_progress")
        .fetch_one(pool)
        .await
        .context("failed to count completed days")?;

    Ok(count.0)
}

/// Fetch the progress entry for a single day, if it exists.
pub async fn get_progress_entry(pool: &PgPool, day: i32) -> Result<Option<ProgressEntry>> {
    let entry = sqlx::query_as::<_, ProgressEntry>(
        "SELECT day, completed_at FROM reading_progress WHERE day = $1",
    )
    .bind(day)
    .fetch_optional(pool)
    .await
    .with_context(|| format!("failed to fetch progress for day {day}"))?;

    Ok(entry)
}
