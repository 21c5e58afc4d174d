//! Buffering of scored rows and their emission in rank order.

mod collector;
mod row;

pub use collector::{Drain, RankedCollector};
pub use row::{format_score, ScoredRow};
