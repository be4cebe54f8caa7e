//! Interactive Driver Lookup
//! Prompts for driver codes after a race board and shows per-driver details.

use crate::board::table::print_driver_details;
use crate::charts::{LapChartData, LapChartViewer};
use crate::data::{RaceLaps, RaceReport, ReportRow};
use log::{debug, warn};
use std::io::{self, BufRead, Write};

const FIRST_PROMPT: &str =
    "\nEnter a driver code to view their statistics (or press Enter to skip): ";
const NEXT_PROMPT: &str =
    "\nEnter another driver code to view their statistics (or press Enter to skip): ";
const RETRY_PROMPT: &str = "Please enter a valid driver code: ";
const GRAPH_PROMPT: &str = "Do you want to see a graph of the lap times? (yes/no): ";

/// Console session for looking up drivers of one race.
///
/// End of input at any prompt ends the session without an error.
pub struct DriverLookup<'a, R, W> {
    input: R,
    output: W,
    viewer: &'a mut dyn LapChartViewer,
}

impl<'a, R: BufRead, W: Write> DriverLookup<'a, R, W> {
    pub fn new(input: R, output: W, viewer: &'a mut dyn LapChartViewer) -> Self {
        Self {
            input,
            output,
            viewer,
        }
    }

    /// Keep asking for driver codes until an empty answer.
    pub fn run(&mut self, report: &RaceReport, race: &RaceLaps) -> io::Result<()> {
        let mut prompt = FIRST_PROMPT;
        while let Some(code) = self.ask(prompt)? {
            if code.is_empty() || !self.show_driver(&code, report, race)? {
                break;
            }
            prompt = NEXT_PROMPT;
        }
        Ok(())
    }

    /// Returns `false` once input has run out.
    fn show_driver(
        &mut self,
        code: &str,
        report: &RaceReport,
        race: &RaceLaps,
    ) -> io::Result<bool> {
        let Some(row) = self.resolve_driver(code, report)? else {
            return Ok(false);
        };
        debug!(target: "lookup", "showing statistics for {}", row.stats.code);
        print_driver_details(&mut self.output, row)?;

        let Some(answer) = self.ask(GRAPH_PROMPT)? else {
            return Ok(false);
        };
        if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
            let laps = race
                .get(&row.stats.code)
                .map(|d| d.laps.as_slice())
                .unwrap_or_default();
            let chart = LapChartData::new(&report.title, row, laps);
            match self.viewer.show(&chart) {
                Ok(Some(path)) => {
                    writeln!(self.output, "Lap chart saved to {}", path.display())?;
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(target: "lookup", "lap chart for {} failed: {}", row.stats.code, err);
                    writeln!(self.output, "Could not display the lap chart: {err}")?;
                }
            }
        }
        Ok(true)
    }

    /// Re-prompt until `code` names a driver in the report.
    fn resolve_driver<'r>(
        &mut self,
        code: &str,
        report: &'r RaceReport,
    ) -> io::Result<Option<&'r ReportRow>> {
        let mut code = code.to_string();
        loop {
            if let Some(row) = report.find(&code) {
                return Ok(Some(row));
            }
            writeln!(
                self.output,
                "Error: Driver with code '{code}' not found in the lap data."
            )?;
            match self.ask(RETRY_PROMPT)? {
                Some(next) => code = next.to_uppercase(),
                None => return Ok(None),
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartError;
    use crate::data::{DataLoader, DataProcessor};
    use crate::stats::StatsCalculator;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingViewer {
        shown: Vec<LapChartData>,
        fail: bool,
        saved_to: Option<PathBuf>,
    }

    impl LapChartViewer for RecordingViewer {
        fn show(&mut self, chart: &LapChartData) -> Result<Option<PathBuf>, ChartError> {
            if self.fail {
                return Err(ChartError::Window("no display".into()));
            }
            self.shown.push(chart.clone());
            Ok(self.saved_to.clone())
        }
    }

    fn fixture() -> (RaceReport, RaceLaps) {
        let registry = DataLoader::parse_driver_details(
            "HAM,Mercedes,44,Lewis Hamilton\nVER,Red Bull,1,Max Verstappen\n",
        )
        .unwrap();
        let race = DataLoader::parse_lap_data("Monza\nHAM90.5\nVER89.2\nHAM89.9\n").unwrap();
        let summary = StatsCalculator::evaluate_lap_data(&race);
        let report = DataProcessor::build_report(&race.title, summary, &registry).unwrap();
        (report, race)
    }

    fn run_session(script: &str, viewer: &mut RecordingViewer) -> String {
        let (report, race) = fixture();
        let mut output = Vec::new();
        DriverLookup::new(Cursor::new(script.to_string()), &mut output, viewer)
            .run(&report, &race)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn empty_answer_skips_lookup() {
        let mut viewer = RecordingViewer::default();
        let text = run_session("\n", &mut viewer);

        assert!(text.contains("Enter a driver code"));
        assert!(!text.contains("Statistics for Driver"));
        assert!(viewer.shown.is_empty());
    }

    #[test]
    fn invalid_code_reprompts_until_valid() {
        let mut viewer = RecordingViewer::default();
        let text = run_session("XYZ\nabc\nham\nno\n\n", &mut viewer);

        assert!(text.contains("Error: Driver with code 'XYZ' not found in the lap data."));
        assert!(text.contains("Error: Driver with code 'ABC' not found in the lap data."));
        assert_eq!(text.matches(RETRY_PROMPT).count(), 2);
        assert!(text.contains("Statistics for Driver: HAM"));
        assert!(text.contains("Enter another driver code"));
        assert!(viewer.shown.is_empty());
    }

    #[test]
    fn yes_shows_chart_for_driver() {
        let mut viewer = RecordingViewer::default();
        run_session("VER\nyes\nHAM\nY\n\n", &mut viewer);

        assert_eq!(viewer.shown.len(), 2);
        assert_eq!(viewer.shown[0].code, "VER");
        assert_eq!(viewer.shown[1].laps, vec![90.5, 89.9]);
        assert_eq!(viewer.shown[1].title, "Lap Times for Lewis Hamilton (Mercedes)");
    }

    #[test]
    fn chart_failure_is_reported_not_fatal() {
        let mut viewer = RecordingViewer {
            fail: true,
            ..Default::default()
        };
        let text = run_session("HAM\nyes\n\n", &mut viewer);

        assert!(text
            .contains("Could not display the lap chart: Failed to open chart window: no display"));
        assert!(text.contains("Enter another driver code"));
    }

    #[test]
    fn saved_chart_path_is_written_to_output() {
        let path = PathBuf::from("charts").join("monza_ver_laps.png");
        let mut viewer = RecordingViewer {
            saved_to: Some(path.clone()),
            ..Default::default()
        };
        let text = run_session("VER\nyes\n\n", &mut viewer);

        let expected = format!("Lap chart saved to {}\n", path.display());
        assert_eq!(text.matches(&expected).count(), 1);
        assert_eq!(viewer.shown.len(), 1);
    }

    #[test]
    fn window_charts_print_no_saved_path() {
        let mut viewer = RecordingViewer::default();
        let text = run_session("VER\nyes\n\n", &mut viewer);
        assert!(!text.contains("Lap chart saved to"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut viewer = RecordingViewer::default();
        let text = run_session("XYZ\n", &mut viewer);
        assert!(text.ends_with(&format!("{RETRY_PROMPT}\n")));

        let text = run_session("", &mut viewer);
        assert!(!text.contains("Statistics for Driver"));
    }
}
