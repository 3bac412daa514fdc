//! Reading-plan domain: generation, progress overlay, service layer.

pub mod generate;
pub mod progress;
pub mod service;

pub use generate::{PLAN_DAYS, PlanDay, REST_LABEL, chapters_for_day, generate_plan};
pub use progress::{PlanStats, apply_progress};
pub use service::{load_plan, set_start_date, start_date};
