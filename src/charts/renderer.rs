//! Static Chart Renderer
//! Renders lap charts to PNG files with plotters.
//!
//! Layout:
//! 1. Title: "Lap Times for {full name} ({team})"
//! 2. Lap times as a line with point markers
//! 3. Dashed-style reference lines at the fastest and average lap
//! 4. Legend in the upper right corner

use crate::charts::{ChartError, LapChartData, LapChartViewer};
use crate::export::file_stem;
use log::info;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const CHART_WIDTH: u32 = 1000;
const CHART_HEIGHT: u32 = 600;

const LAP_COLOR: RGBColor = RGBColor(52, 152, 219);
const FASTEST_COLOR: RGBColor = RGBColor(46, 204, 113);
const AVERAGE_COLOR: RGBColor = RGBColor(231, 76, 60);

fn render_err<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// File name for a driver's chart within a race.
    pub fn chart_file_name(chart: &LapChartData) -> String {
        format!(
            "{}_{}_laps.png",
            file_stem(&chart.race),
            chart.code.to_lowercase()
        )
    }

    /// Render the lap chart to `path` as a PNG.
    pub fn render_lap_chart(chart: &LapChartData, path: &Path) -> Result<(), ChartError> {
        let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let (x_min, x_max) = chart.x_range();
        let (y_min, y_max) = chart.y_range();

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(render_err)?;

        ctx.configure_mesh()
            .x_desc("Lap Number")
            .y_desc("Lap Time (seconds)")
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|y| format!("{y:.3}"))
            .draw()
            .map_err(render_err)?;

        let points: Vec<(f64, f64)> = chart.points().into_iter().map(|[x, y]| (x, y)).collect();

        ctx.draw_series(LineSeries::new(
            points.iter().copied(),
            LAP_COLOR.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("Lap Times")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LAP_COLOR.stroke_width(2)));

        ctx.draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, 4, LAP_COLOR.filled())),
        )
        .map_err(render_err)?;

        let references = [
            (chart.fastest, chart.fastest_label(), FASTEST_COLOR),
            (chart.average, chart.average_label(), AVERAGE_COLOR),
        ];
        for (value, label, color) in references {
            ctx.draw_series(Self::dashed_segments(x_min, x_max, value).map(|seg| {
                PathElement::new(seg, color.stroke_width(2))
            }))
            .map_err(render_err)?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }

    /// Short horizontal segments at height `y`, giving a dashed line.
    fn dashed_segments(x_min: f64, x_max: f64, y: f64) -> impl Iterator<Item = Vec<(f64, f64)>> {
        let dash = (x_max - x_min) / 60.0;
        (0..30).map(move |i| {
            let start = x_min + (2 * i) as f64 * dash;
            vec![(start, y), (start + dash, y)]
        })
    }
}

/// Writes charts as PNG files and optionally opens them with the system viewer.
pub struct PngChartViewer {
    pub dir: PathBuf,
    pub open: bool,
}

impl PngChartViewer {
    pub fn new(dir: impl Into<PathBuf>, open: bool) -> Self {
        Self {
            dir: dir.into(),
            open,
        }
    }
}

impl LapChartViewer for PngChartViewer {
    fn show(&mut self, chart: &LapChartData) -> Result<Option<PathBuf>, ChartError> {
        if !self.dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.dir).map_err(render_err)?;
        }
        let path = self.dir.join(StaticChartRenderer::chart_file_name(chart));
        StaticChartRenderer::render_lap_chart(chart, &path)?;
        info!(target: "charts", "lap chart written to {}", path.display());

        if self.open {
            open::that(&path).map_err(|source| ChartError::Open {
                path: path.clone(),
                source,
            })?;
        }
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_cover_the_axis() {
        let segments: Vec<_> = StaticChartRenderer::dashed_segments(0.5, 6.5, 90.0).collect();
        assert_eq!(segments.len(), 30);
        assert_eq!(segments[0], vec![(0.5, 90.0), (0.6, 90.0)]);
        let last = segments.last().unwrap();
        assert!(last[1].0 <= 6.5 + 1e-9);
        assert!(segments.iter().all(|s| s.iter().all(|&(_, y)| y == 90.0)));
    }

    #[test]
    fn chart_file_name_combines_race_and_driver() {
        let chart = LapChartData {
            race: "Dewsberry 2".into(),
            code: "HAM".into(),
            title: String::new(),
            laps: vec![90.0],
            fastest: 90.0,
            average: 90.0,
        };
        assert_eq!(
            StaticChartRenderer::chart_file_name(&chart),
            "dewsberry_2_ham_laps.png"
        );
    }
}
