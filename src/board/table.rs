//! Console Timing Board
//! Renders race results and single-driver details for the terminal.

use crate::data::{RaceReport, ReportRow, RESULT_COLUMNS};
use comfy_table::{presets::ASCII_FULL, Cell, CellAlignment, ContentArrangement, Table};
use std::io::{self, Write};

/// Format a lap time with three decimals; NaN shows as `n/a`.
pub fn format_time(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{value:.3}")
    }
}

/// Build the results grid, one row per driver in report order.
pub fn build_results_table(report: &RaceReport) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(RESULT_COLUMNS.iter().map(|h| Cell::new(*h)));

    for row in &report.rows {
        table.add_row(vec![
            Cell::new(&row.stats.code),
            Cell::new(&row.driver.full_name),
            Cell::new(&row.driver.team),
            Cell::new(&row.driver.car_number),
            Cell::new(format_time(row.stats.fastest)).set_alignment(CellAlignment::Right),
            Cell::new(format_time(row.stats.average)).set_alignment(CellAlignment::Right),
            Cell::new(row.stats.total_laps).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Print title, overall fastest lap and the results grid.
pub fn print_race_results<W: Write>(out: &mut W, report: &RaceReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", report.title)?;
    match &report.overall_fastest {
        Some(best) => writeln!(out, "Overall Fastest Lap: {} - {:.3}", best.code, best.time)?,
        None => writeln!(out, "Overall Fastest Lap: n/a")?,
    }
    writeln!(out, "{}", build_results_table(report))
}

/// Print the statistics block for one driver.
pub fn print_driver_details<W: Write>(out: &mut W, row: &ReportRow) -> io::Result<()> {
    let stats = &row.stats;
    writeln!(out)?;
    writeln!(out, "Statistics for Driver: {}", stats.code)?;
    writeln!(out, "Full Name: {}", row.driver.full_name)?;
    writeln!(out, "Team: {}", row.driver.team)?;
    writeln!(out, "Car Number: {}", row.driver.car_number)?;
    writeln!(out, "Fastest Lap: {}", format_time(stats.fastest))?;
    writeln!(out, "Average Lap: {}", format_time(stats.average))?;
    writeln!(out, "Median Lap: {}", format_time(stats.median))?;
    writeln!(out, "Std Deviation: {}", format_time(stats.std_dev))?;
    writeln!(out, "Total Laps: {}", stats.total_laps)
}
