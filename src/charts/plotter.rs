//! Chart Plotter Module
//! Lap chart data and the interactive egui_plot view of it.

use crate::board::format_time;
use crate::data::ReportRow;
use egui::Color32;
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points};

pub const LAP_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const FASTEST_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green
pub const AVERAGE_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

/// Everything needed to draw one driver's lap chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LapChartData {
    pub race: String,
    pub code: String,
    pub title: String,
    pub laps: Vec<f64>,
    pub fastest: f64,
    pub average: f64,
}

impl LapChartData {
    pub fn new(race: &str, row: &ReportRow, laps: &[f64]) -> Self {
        Self {
            race: race.to_string(),
            code: row.stats.code.clone(),
            title: format!(
                "Lap Times for {} ({})",
                row.driver.full_name, row.driver.team
            ),
            laps: laps.to_vec(),
            fastest: row.stats.fastest,
            average: row.stats.average,
        }
    }

    /// (lap number, lap time) pairs; lap numbers start at 1.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.laps
            .iter()
            .enumerate()
            .map(|(i, &t)| [(i + 1) as f64, t])
            .collect()
    }

    pub fn fastest_label(&self) -> String {
        format!("Fastest Lap: {}", format_time(self.fastest))
    }

    pub fn average_label(&self) -> String {
        format!("Average Lap: {}", format_time(self.average))
    }

    /// Lap number axis, padded by half a lap on both ends.
    pub fn x_range(&self) -> (f64, f64) {
        (0.5, self.laps.len().max(1) as f64 + 0.5)
    }

    /// Lap time axis with 15% padding around the data.
    pub fn y_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.laps {
            if !v.is_nan() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min.is_infinite() {
            return (0.0, 1.0);
        }
        let pad = if max > min { (max - min) * 0.15 } else { 0.5 };
        (min - pad, max + pad)
    }
}

/// Draws lap charts with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the lap chart: lap times with fastest and average reference lines.
    pub fn draw_lap_chart(ui: &mut egui::Ui, chart: &LapChartData) {
        let (x_min, x_max) = chart.x_range();
        let (y_min, y_max) = chart.y_range();

        Plot::new(format!("laps_{}_{}", chart.race, chart.code))
            .legend(Legend::default())
            .x_axis_label("Lap Number")
            .y_axis_label("Lap Time (seconds)")
            .include_x(x_min)
            .include_x(x_max)
            .include_y(y_min)
            .include_y(y_max)
            .y_axis_formatter(|mark, _range| format_time(mark.value))
            .show(ui, |plot_ui| {
                let points = chart.points();

                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .color(LAP_COLOR)
                        .width(2.0)
                        .name("Lap Times"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .radius(4.0)
                        .color(LAP_COLOR)
                        .name("Lap Times"),
                );
                plot_ui.hline(
                    HLine::new(chart.fastest)
                        .color(FASTEST_COLOR)
                        .style(LineStyle::dashed_loose())
                        .name(chart.fastest_label()),
                );
                plot_ui.hline(
                    HLine::new(chart.average)
                        .color(AVERAGE_COLOR)
                        .style(LineStyle::dashed_loose())
                        .name(chart.average_label()),
                );
            });
    }
}
