//! Completion overlay and dashboard statistics.
//!
//! The generator always emits `completed: false`; the persisted progress
//! rows are the only source of truth for completion and get overlaid
//! here after generation.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::generate::{PLAN_DAYS, PlanDay};

/// Mark the given day numbers complete in a generated plan.
pub fn apply_progress(plan: &mut [PlanDay], completed_days: &HashSet<i32>) {
    for day in plan.iter_mut() {
        if completed_days.contains(&(day.day as i32)) {
            day.completed = true;
        }
    }
}

/// Summary numbers for the `status` dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStats {
    /// Days marked complete.
    pub completed_days: u32,
    /// Whole-number percentage of the year finished.
    pub percent: u32,
    /// The day the reader is on: one past the number of completed days.
    /// Position in the plan is tracked by readings finished, not by the
    /// calendar, so missing a date never skips a reading.
    pub current_day: u32,
    /// Headline passage for the current day, or `None` once all 365 days
    /// are done.
    pub today_passage: Option<String>,
    /// Date label of the current day, e.g. `"Mar 04"`.
    pub today_date: Option<String>,
    /// The date the plan finishes: start plus 364 days.
    pub finish_date: NaiveDate,
}

impl PlanStats {
    /// Compute stats for a generated plan.
    ///
    /// `plan` must be the full 365-entry plan; `start` is the plan's
    /// start date (the date of day 1).
    pub fn summarize(plan: &[PlanDay], completed_days: u32, start: NaiveDate) -> Self {
        let completed_days = completed_days.min(PLAN_DAYS);
        let percent =
            (f64::from(completed_days) / f64::from(PLAN_DAYS) * 100.0).round() as u32;
        let current_day = completed_days + 1;

        let current = plan.iter().find(|d| d.day == current_day);
        let today_passage = current.and_then(|d| d.passages.first().cloned());
        let today_date = current.map(|d| d.date_label());

        let finish_date = start + chrono::Days::new(u64::from(PLAN_DAYS - 1));

        Self {
            completed_days,
            percent,
            current_day,
            today_passage,
            today_date,
            finish_date,
        }
    }

    /// Whether every day of the plan has been read.
    pub fn is_finished(&self) -> bool {
        self.completed_days >= PLAN_DAYS
    }
}
