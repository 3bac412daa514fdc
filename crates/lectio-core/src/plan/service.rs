//! Plan service layer.
//!
//! Bridges the pure generator and the settings/progress tables: loads the
//! persisted start date, generates the plan, and overlays completion
//! state. The plan itself is never persisted; changing the start date
//! simply changes what the next load generates.

use std::collections::HashSet;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::debug;

use lectio_db::models::PLAN_START_DATE;
use lectio_db::queries::{progress, settings};

use super::generate::{PlanDay, generate_plan};
use super::progress::apply_progress;

/// Storage format for the start date setting.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Load the reading plan with completion state applied.
///
/// Uses the persisted start date when one is set; otherwise the generator
/// defaults to January 1 of the current year. A malformed stored date is
/// an error rather than a silent fallback.
pub async fn load_plan(pool: &PgPool) -> Result<Vec<PlanDay>> {
    let start = start_date(pool).await?;
    let mut plan = generate_plan(start);

    let completed: HashSet<i32> = progress::list_completed_days(pool)
        .await?
        .into_iter()
        .collect();
    debug!(completed = completed.len(), "overlaying progress");
    apply_progress(&mut plan, &completed);

    Ok(plan)
}

/// The persisted plan start date, if one has been set.
pub async fn start_date(pool: &PgPool) -> Result<Option<NaiveDate>> {
    let raw = settings::get_setting(pool, PLAN_START_DATE).await?;
    match raw {
        Some(value) => {
            let date = NaiveDate::parse_from_str(&value, DATE_FORMAT)
                .with_context(|| format!("stored start date {value:?} is not YYYY-MM-DD"))?;
            Ok(Some(date))
        }
        None => Ok(None),
    }
}

/// Validate and persist a new start date.
///
/// Returns the parsed date. The next [`load_plan`] call regenerates the
/// whole plan from it.
pub async fn set_start_date(pool: &PgPool, value: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("invalid start date {value:?}: expected YYYY-MM-DD"))?;

    settings::set_setting(pool, PLAN_START_DATE, &date.format(DATE_FORMAT).to_string()).await?;
    Ok(date)
}
