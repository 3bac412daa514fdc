//! Domain logic for lectio: the canon table, the 365-day reading-plan
//! generator, progress statistics, the scripture text client, and the AI
//! insight client.

pub mod canon;
pub mod insight;
pub mod plan;
pub mod scripture;
