//! `lectio status` command: the progress dashboard.

use anyhow::Result;
use sqlx::PgPool;

use lectio_core::plan::{PLAN_DAYS, PlanStats, service};
use lectio_db::queries::progress;

const BAR_WIDTH: usize = 30;

/// Print the annual-progress summary.
pub async fn run_status(pool: &PgPool) -> Result<()> {
    let plan = service::load_plan(pool).await?;
    let completed = progress::completed_count(pool).await? as u32;
    let stats = PlanStats::summarize(&plan, completed, plan[0].date);

    println!("Annual reading plan");
    println!();
    println!("  [{}] {}%", progress_bar(stats.percent), stats.percent);
    println!(
        "  {} of {} days read",
        stats.completed_days, PLAN_DAYS
    );
    println!();

    if stats.is_finished() {
        println!("  The plan is complete. Well done!");
    } else {
        match (&stats.today_passage, &stats.today_date) {
            (Some(passage), Some(date)) => {
                println!("  Today ({date}): {passage}");
                println!("  Day {} of the plan", stats.current_day);
            }
            _ => println!("  Day {} of the plan", stats.current_day),
        }
    }

    println!(
        "  Estimated finish: {}",
        stats.finish_date.format("%b %d, %Y")
    );

    Ok(())
}

/// Fixed-width ASCII progress bar.
fn progress_bar(percent: u32) -> String {
    let filled = (percent as usize * BAR_WIDTH) / 100;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
