use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One completed plan day.
///
/// `day` is the plan day number (1..=365). Rows are only ever inserted;
/// marking a day complete twice is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProgressEntry {
    pub day: i32,
    pub completed_at: DateTime<Utc>,
}

/// A freeform note attached to a passage reference (e.g. "John 3").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: i32,
    pub reference: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A key/value application setting.
///
/// The plan start date is stored under [`PLAN_START_DATE`] as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

/// Settings key holding the plan start date.
pub const PLAN_START_DATE: &str = "plan_start_date";
