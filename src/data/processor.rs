//! Report Processor Module
//! Joins lap statistics with driver details and shapes them into a results table.

use crate::data::{DriverRecord, DriverRegistry};
use crate::stats::{DriverStats, OverallFastest, RaceSummary};
use polars::prelude::*;
use thiserror::Error;

/// Column headers shared by the console board and the CSV export.
pub const RESULT_COLUMNS: [&str; 7] = [
    "Driver ID",
    "Full Name",
    "Team",
    "Car Number",
    "Fastest Lap",
    "Average Lap",
    "Total Laps",
];

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Driver '{0}' appears in the lap data but not in the driver details file")]
    UnknownDriver(String),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One line of the timing board.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub driver: DriverRecord,
    pub stats: DriverStats,
}

/// Everything needed to present one race.
#[derive(Debug, Clone)]
pub struct RaceReport {
    pub title: String,
    pub overall_fastest: Option<OverallFastest>,
    /// Sorted by fastest lap; equal times keep lap-file order.
    pub rows: Vec<ReportRow>,
}

impl RaceReport {
    /// Find a row by driver code, ignoring ASCII case.
    pub fn find(&self, code: &str) -> Option<&ReportRow> {
        self.rows
            .iter()
            .find(|row| row.stats.code.eq_ignore_ascii_case(code))
    }

    /// Build the results table in report order.
    pub fn to_dataframe(&self) -> Result<DataFrame, ProcessorError> {
        let mut codes = Vec::with_capacity(self.rows.len());
        let mut names = Vec::with_capacity(self.rows.len());
        let mut teams = Vec::with_capacity(self.rows.len());
        let mut cars = Vec::with_capacity(self.rows.len());
        let mut fastest = Vec::with_capacity(self.rows.len());
        let mut average = Vec::with_capacity(self.rows.len());
        let mut laps = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            codes.push(row.stats.code.clone());
            names.push(row.driver.full_name.clone());
            teams.push(row.driver.team.clone());
            cars.push(row.driver.car_number.clone());
            fastest.push(row.stats.fastest);
            average.push(row.stats.average);
            laps.push(row.stats.total_laps as u32);
        }

        let df = DataFrame::new(vec![
            Column::new(RESULT_COLUMNS[0].into(), codes),
            Column::new(RESULT_COLUMNS[1].into(), names),
            Column::new(RESULT_COLUMNS[2].into(), teams),
            Column::new(RESULT_COLUMNS[3].into(), cars),
            Column::new(RESULT_COLUMNS[4].into(), fastest),
            Column::new(RESULT_COLUMNS[5].into(), average),
            Column::new(RESULT_COLUMNS[6].into(), laps),
        ])?;

        Ok(df)
    }
}

/// Handles the join between statistics and driver details.
pub struct DataProcessor;

impl DataProcessor {
    /// Build a race report sorted by fastest lap.
    ///
    /// Every driver in the lap data must exist in the registry.
    pub fn build_report(
        title: &str,
        summary: RaceSummary,
        registry: &DriverRegistry,
    ) -> Result<RaceReport, ProcessorError> {
        let mut rows = summary
            .drivers
            .into_iter()
            .map(|stats| {
                let driver = registry
                    .get(&stats.code)
                    .cloned()
                    .ok_or_else(|| ProcessorError::UnknownDriver(stats.code.clone()))?;
                Ok(ReportRow { driver, stats })
            })
            .collect::<Result<Vec<_>, ProcessorError>>()?;

        rows.sort_by(|a, b| a.stats.fastest.total_cmp(&b.stats.fastest));

        Ok(RaceReport {
            title: title.to_string(),
            overall_fastest: summary.overall_fastest,
            rows,
        })
    }
}
