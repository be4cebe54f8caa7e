//! Stats module - lap time statistics

mod calculator;

pub use calculator::{DriverStats, OverallFastest, RaceSummary, StatsCalculator};
