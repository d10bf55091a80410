//! Run coordination: resolved settings and the two-phase benchmark.
mod runner;
mod settings;


pub use runner::{PHASE_PAUSE, RunReport, run_benchmark, run_phases};
pub use settings::Settings;
