//! Race Pipeline
//! Load, evaluate, print and export a single race file.

use crate::board::print_race_results;
use crate::data::{
    DataLoader, DataProcessor, DriverRegistry, LoaderError, ProcessorError, RaceLaps, RaceReport,
};
use crate::export::{CsvExporter, ExportError};
use crate::stats::StatsCalculator;
use log::info;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaceError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Report(#[from] ProcessorError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("Console output failed")]
    Console(#[from] io::Error),
}

/// A race that has been printed and written to disk.
#[derive(Debug)]
pub struct ProcessedRace {
    pub laps: RaceLaps,
    pub report: RaceReport,
    pub results_path: PathBuf,
}

/// Run one race file through load → evaluate → report → export.
///
/// The results file is only created once the race loads and every driver
/// is known.
pub fn process_race_file<W: Write>(
    path: &Path,
    registry: &DriverRegistry,
    output_dir: &Path,
    out: &mut W,
) -> Result<ProcessedRace, RaceError> {
    writeln!(out, "\nProcessing file: {}", path.display())?;
    info!(target: "pipeline", "processing race file {}", path.display());

    let laps = DataLoader::load_lap_data(path)?;
    let summary = StatsCalculator::evaluate_lap_data(&laps);
    let report = DataProcessor::build_report(&laps.title, summary, registry)?;

    print_race_results(out, &report)?;
    let results_path = CsvExporter::save_results(&report, output_dir)?;
    writeln!(out, "Race results saved to {}", results_path.display())?;
    info!(
        target: "pipeline",
        "{}: {} drivers written to {}",
        report.title,
        report.rows.len(),
        results_path.display()
    );

    Ok(ProcessedRace {
        laps,
        report,
        results_path,
    })
}
