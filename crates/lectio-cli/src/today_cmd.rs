//! `lectio today` command: show the current day's reading.

use anyhow::Result;
use sqlx::PgPool;

use lectio_core::plan::{PLAN_DAYS, service};
use lectio_db::queries::progress;

/// Print the reading for the day the reader is on.
///
/// The current day is one past the number of completed days, so a missed
/// calendar day never skips a reading.
pub async fn run_today(pool: &PgPool) -> Result<()> {
    let plan = service::load_plan(pool).await?;
    let completed = progress::completed_count(pool).await? as u32;
    let current_day = completed + 1;

    if current_day > PLAN_DAYS {
        println!("All 365 days read. The plan is complete!");
        return Ok(());
    }

    // Day numbers are 1-based and dense, so index directly.
    let day = &plan[(current_day - 1) as usize];

    println!("Day {} of {} ({})", day.day, PLAN_DAYS, day.date_label());
    println!("Reading: {}", day.label);

    if day.passages.is_empty() {
        return Ok(());
    }

    println!();
    for passage in &day.passages {
        println!("  {passage}");
    }
    println!();
    println!("When finished: lectio complete {}", day.day);

    Ok(())
}
