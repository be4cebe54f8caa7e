//! GUI module - interactive lap chart window

mod app;

pub use app::LapChartApp;

use crate::charts::{ChartError, LapChartData, LapChartViewer};
use eframe::egui;
use log::debug;
use std::path::PathBuf;

/// Shows each chart in a native window and blocks until it is closed.
#[derive(Debug, Default)]
pub struct WindowChartViewer;

impl LapChartViewer for WindowChartViewer {
    fn show(&mut self, chart: &LapChartData) -> Result<Option<PathBuf>, ChartError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 600.0])
                .with_min_inner_size([600.0, 400.0])
                .with_title(&chart.title),
            ..Default::default()
        };

        debug!(target: "gui", "opening chart window for {}", chart.code);
        let chart = chart.clone();
        eframe::run_native(
            "Timing Board",
            options,
            Box::new(move |_cc| Ok(Box::new(LapChartApp::new(chart)))),
        )
        .map_err(|e| ChartError::Window(e.to_string()))?;
        Ok(None)
    }
}
