//! Timing Board - Race Lap Timing Summarizer
//!
//! Usage: timing_board [OPTIONS] <DRIVERS> <RACES>...

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use log::{error, info};
use std::io::{self, Write};
use std::process::ExitCode;

use timing_board::board::DriverLookup;
use timing_board::charts::{LapChartViewer, PngChartViewer};
use timing_board::cli::{Args, PlotMode};
use timing_board::data::DataLoader;
use timing_board::gui::WindowChartViewer;
use timing_board::logging::setup_logging;
use timing_board::pipeline::process_race_file;

fn run(args: Args) -> Result<()> {
    let registry = DataLoader::load_driver_details(&args.drivers)?;
    info!(target: "main", "{} drivers registered", registry.len());

    let mut viewer: Box<dyn LapChartViewer> = match args.plot {
        PlotMode::Window => Box::new(WindowChartViewer),
        PlotMode::Png => Box::new(PngChartViewer::new(&args.plot_dir, !args.no_open)),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();

    for race_path in &args.races {
        let processed =
            process_race_file(race_path, &registry, &args.output_dir, &mut stdout.lock())?;

        if !args.batch {
            DriverLookup::new(stdin.lock(), stdout.lock(), viewer.as_mut())
                .run(&processed.report, &processed.laps)
                .context("driver lookup failed")?;
        }
    }

    stdout.lock().flush()?;
    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables from .env if present
    let _ = dotenv();
    let args = Args::parse();

    if let Err(e) = setup_logging(&args.log_level, args.log_file.as_deref()) {
        eprintln!("Error: failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: "main", "{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
