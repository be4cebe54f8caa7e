//! Statistics Calculator Module
//! Reduces each driver's lap sequence to summary statistics.

use crate::data::RaceLaps;
use statrs::statistics::{Data, Median, Statistics};

/// Statistics for a single driver's laps.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverStats {
    pub code: String,
    pub fastest: f64,
    pub average: f64,
    pub total_laps: usize,
    pub median: f64,
    /// Sample standard deviation; NaN with fewer than two laps.
    pub std_dev: f64,
}

impl Default for DriverStats {
    fn default() -> Self {
        Self {
            code: String::new(),
            fastest: f64::NAN,
            average: f64::NAN,
            total_laps: 0,
            median: f64::NAN,
            std_dev: f64::NAN,
        }
    }
}

/// The single quickest lap of a race.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallFastest {
    pub code: String,
    pub time: f64,
}

/// Per-driver statistics for one race, in lap-file order.
#[derive(Debug, Clone, Default)]
pub struct RaceSummary {
    pub overall_fastest: Option<OverallFastest>,
    pub drivers: Vec<DriverStats>,
}

/// Handles lap time statistics.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for one lap sequence.
    pub fn compute_driver_stats(code: &str, laps: &[f64]) -> DriverStats {
        if laps.is_empty() {
            return DriverStats {
                code: code.to_string(),
                ..DriverStats::default()
            };
        }

        let std_dev = if laps.len() > 1 {
            Statistics::std_dev(laps)
        } else {
            f64::NAN
        };

        DriverStats {
            code: code.to_string(),
            fastest: Statistics::min(laps),
            average: Statistics::mean(laps),
            total_laps: laps.len(),
            median: Data::new(laps.to_vec()).median(),
            std_dev,
        }
    }

    /// Evaluate every driver of a race and find the overall fastest lap.
    ///
    /// Ties on the overall fastest keep the driver that appears first.
    pub fn evaluate_lap_data(race: &RaceLaps) -> RaceSummary {
        let mut overall_fastest: Option<OverallFastest> = None;
        let mut drivers = Vec::with_capacity(race.drivers().len());

        for driver in race.drivers() {
            let stats = Self::compute_driver_stats(&driver.code, &driver.laps);
            let quicker = overall_fastest
                .as_ref()
                .map_or(true, |best| stats.fastest < best.time);
            if quicker && stats.total_laps > 0 {
                overall_fastest = Some(OverallFastest {
                    code: stats.code.clone(),
                    time: stats.fastest,
                });
            }
            drivers.push(stats);
        }

        RaceSummary {
            overall_fastest,
            drivers,
        }
    }
}
