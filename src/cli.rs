//! Command line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How lap charts are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlotMode {
    /// Interactive window
    #[default]
    Window,
    /// PNG file opened with the system image viewer
    Png,
}

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Race lap timing board: per-driver lap statistics, CSV results and lap charts"
)]
pub struct Args {
    /// Driver details file (code,team,car_number,full_name per line)
    pub drivers: PathBuf,

    /// Race lap files (title line, then <code><lap time> per line)
    #[arg(required = true)]
    pub races: Vec<PathBuf>,

    /// Directory for the CSV results
    #[arg(short, long, env = "TIMING_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip the interactive driver lookup after each race
    #[arg(long, env = "TIMING_BATCH")]
    pub batch: bool,

    /// How lap charts are shown
    #[arg(long, env = "TIMING_PLOT", value_enum, default_value_t = PlotMode::Window)]
    pub plot: PlotMode,

    /// Directory for rendered PNG charts
    #[arg(long, env = "TIMING_PLOT_DIR", default_value = ".")]
    pub plot_dir: PathBuf,

    /// Do not open rendered PNG charts
    #[arg(long)]
    pub no_open: bool,

    /// Log level: OFF, ERROR, WARN, INFO, DEBUG or TRACE
    #[arg(long, env = "LOGGING_LEVEL", default_value = "WARN")]
    pub log_level: String,

    /// Also append log records to this file
    #[arg(long, env = "TIMING_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
