//! Charts module - lap time chart rendering

mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, LapChartData};
pub use renderer::{PngChartViewer, StaticChartRenderer};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to open chart window: {0}")]
    Window(String),
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Failed to open '{}' with the system viewer: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can present a lap chart to the user.
pub trait LapChartViewer {
    /// Present `chart`, returning the file it was saved to, if any.
    fn show(&mut self, chart: &LapChartData) -> Result<Option<PathBuf>, ChartError>;
}
