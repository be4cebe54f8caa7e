//! Data module - driver registry and lap file loading, report building

mod loader;
mod models;
mod processor;

pub use loader::{DataLoader, LoaderError};
pub use models::{DriverLaps, DriverRecord, DriverRegistry, RaceLaps};
pub use processor::{DataProcessor, ProcessorError, RaceReport, ReportRow, RESULT_COLUMNS};
