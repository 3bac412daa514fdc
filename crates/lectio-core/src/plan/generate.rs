//! Reading-plan generation.
//!
//! Walks the canon front to back, packing three chapters into each day
//! (four on every fourth day) until the table runs out. This module
//! contains pure logic (no I/O or database access): given the same start
//! date it always produces the same 365 entries.

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::canon::{Book, CANON};

/// Number of days in a plan.
pub const PLAN_DAYS: u32 = 365;

/// Label used for days after the canon is exhausted.
pub const REST_LABEL: &str = "Rest & Reflection";

/// One day of the reading plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    /// Day number, 1..=365.
    pub day: u32,
    /// Human-readable passage range, e.g. `"Genesis 1-3"`.
    pub label: String,
    /// Individual chapter references, e.g. `["Genesis 1", "Genesis 2"]`.
    pub passages: Vec<String>,
    /// Calendar date this day falls on.
    pub date: NaiveDate,
    /// Whether the reader has finished this day. Always `false` as
    /// produced here; overlaid from the progress store by the caller.
    pub completed: bool,
}

impl PlanDay {
    /// Short month/day form of [`Self::date`], e.g. `"Jan 01"`.
    pub fn date_label(&self) -> String {
        self.date.format("%b %d").to_string()
    }
}

/// Chapters assigned to a given day: 4 on every fourth day, otherwise 3.
pub fn chapters_for_day(day: u32) -> u32 {
    if day % 4 == 0 { 4 } else { 3 }
}

/// Generate the full 365-day plan.
///
/// When `start` is `None`, the plan begins on January 1 of the current
/// local year. The result is deterministic for a given start date.
pub fn generate_plan(start: Option<NaiveDate>) -> Vec<PlanDay> {
    let start = start.unwrap_or_else(|| default_start_date(Local::now().year()));
    generate_plan_over(&CANON, start)
}

/// January 1 of the given year.
pub fn default_start_date(year: i32) -> NaiveDate {
    // Jan 1 exists in every year chrono can represent.
    NaiveDate::from_ymd_opt(year, 1, 1).expect("January 1 is always a valid date")
}

/// Generate a plan over an arbitrary book table.
///
/// Split out from [`generate_plan`] so the exhaustion path can be
/// exercised with a small table; the cadence never drains the real canon
/// within 365 days.
fn generate_plan_over(books: &[Book], start: NaiveDate) -> Vec<PlanDay> {
    let mut plan = Vec::with_capacity(PLAN_DAYS as usize);

    // Cursor pair walking the table: which book, and which chapter within it.
    let mut book_index = 0usize;
    let mut chapter = 1u32;

    for day in 1..=PLAN_DAYS {
        let mut passages = Vec::new();

        for _ in 0..chapters_for_day(day) {
            let Some(book) = books.get(book_index) else {
                break;
            };
            passages.push(format!("{} {chapter}", book.name));
            chapter += 1;
            if chapter > book.chapters {
                book_index += 1;
                chapter = 1;
            }
        }

        let label = day_label(&passages);
        let date = start
            .checked_add_days(Days::new(u64::from(day - 1)))
            .expect("start date within 365 days of a representable date");

        plan.push(PlanDay {
            day,
            label,
            passages,
            date,
            completed: false,
        });
    }

    plan
}

/// Derive the display label for a day's passages.
///
/// A single chapter keeps its reference as-is; a range within one book
/// collapses to `"Book first-last"`; a range crossing books joins the
/// first and last references. Empty days get [`REST_LABEL`].
fn day_label(passages: &[String]) -> String {
    let (Some(first), Some(last)) = (passages.first(), passages.last()) else {
        return REST_LABEL.to_string();
    };

    let (first_book, first_chapter) = split_reference(first);
    let (last_book, last_chapter) = split_reference(last);

    if first_book == last_book {
        if first_chapter == last_chapter {
            first.clone()
        } else {
            format!("{first_book} {first_chapter}-{last_chapter}")
        }
    } else {
        format!("{first} - {last}")
    }
}

/// Split `"1 Samuel 12"` into `("1 Samuel", "12")`.
///
/// Book names may themselves contain spaces, so the chapter is whatever
/// follows the final space.
fn split_reference(reference: &str) -> (&str, &str) {
    match reference.rfind(' ') {
        Some(pos) => (&reference[..pos], &reference[pos + 1..]),
        None => (reference, ""),
    }
}
