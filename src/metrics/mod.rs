//! Per-request outcomes, phase statistics, and report rendering.
mod report;
mod stats;
mod types;


pub use report::{report_json, report_lines};
pub use stats::PhaseStats;
pub use types::{Outcome, Phase};
