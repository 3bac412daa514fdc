//! `lectio plan` commands: list the year, show one day, manage the start
//! date.

use anyhow::{Context, Result, bail};
use sqlx::PgPool;

use lectio_core::plan::{PLAN_DAYS, service};
use lectio_db::queries::progress;

use crate::PlanCommands;

/// Days shown before/after the current day when listing without `--all`.
const LIST_WINDOW_BEFORE: u32 = 3;
const LIST_WINDOW_AFTER: u32 = 10;

/// Dispatch a `lectio plan` subcommand.
pub async fn run_plan_command(command: PlanCommands, pool: &PgPool) -> Result<()> {
    match command {
        PlanCommands::List { all } => run_list(pool, all).await,
        PlanCommands::Show { day } => run_show(pool, day).await,
    }
}

/// Validate a user-supplied day number.
pub fn validate_day(day: u32) -> Result<u32> {
    if day == 0 || day > PLAN_DAYS {
        bail!("day must be between 1 and {PLAN_DAYS}, got {day}");
    }
    Ok(day)
}

/// Print the plan as a table.
///
/// Defaults to a window around the current day; `--all` prints the whole
/// year.
async fn run_list(pool: &PgPool, all: bool) -> Result<()> {
    let plan = service::load_plan(pool).await?;
    let completed = progress::completed_count(pool).await? as u32;
    let current_day = (completed + 1).min(PLAN_DAYS);

    let (from, to) = if all {
        (1, PLAN_DAYS)
    } else {
        (
            current_day.saturating_sub(LIST_WINDOW_BEFORE).max(1),
            (current_day + LIST_WINDOW_AFTER).min(PLAN_DAYS),
        )
    };

    println!("{:<5} {:<8} {:<28} {}", "DAY", "DATE", "READING", "DONE");
    println!("{}", "-".repeat(48));

    for day in &plan[(from - 1) as usize..to as usize] {
        let marker = if day.completed { "x" } else { "" };
        let arrow = if day.day == current_day { ">" } else { " " };
        println!(
            "{arrow}{:<4} {:<8} {:<28} {marker}",
            day.day,
            day.date_label(),
            day.label,
        );
    }

    if !all {
        println!();
        println!("Showing days {from}-{to}. Use --all for the full year.");
    }

    Ok(())
}

/// Print one day in detail.
async fn run_show(pool: &PgPool, day: u32) -> Result<()> {
    let day = validate_day(day)?;
    let plan = service::load_plan(pool).await?;

    let entry = plan
        .iter()
        .find(|d| d.day == day)
        .with_context(|| format!("day {day} not found in plan"))?;

    println!("Day {} ({})", entry.day, entry.date_label());
    println!("Reading: {}", entry.label);
    println!("Completed: {}", if entry.completed { "yes" } else { "no" });

    if !entry.passages.is_empty() {
        println!();
        for passage in &entry.passages {
            println!("  {passage}");
        }
    }

    Ok(())
}

/// Show or set the plan start date (`lectio start-date [DATE]`).
pub async fn run_start_date(pool: &PgPool, date: Option<&str>) -> Result<()> {
    match date {
        Some(value) => {
            let parsed = service::set_start_date(pool, value).await?;
            println!("Start date set to {}.", parsed.format("%Y-%m-%d"));
            println!("The plan now runs through {}.", (parsed + chrono::Days::new(364)).format("%b %d, %Y"));
        }
        None => match service::start_date(pool).await? {
            Some(date) => println!("Start date: {}", date.format("%Y-%m-%d")),
            None => {
                println!("No start date set; the plan defaults to January 1 of this year.");
                println!("Set one with: lectio start-date YYYY-MM-DD");
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_day_accepts_plan_range() {
        assert_eq!(validate_day(1).unwrap(), 1);
        assert_eq!(validate_day(365).unwrap(), 365);
    }

    #[test]
    fn validate_day_rejects_out_of_range() {
        assert!(validate_day(0).is_err());
        assert!(validate_day(366).is_err());
    }
}
