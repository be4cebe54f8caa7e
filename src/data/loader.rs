//! Input File Loader Module
//! Handles the driver details file and race lap files.

use crate::data::{DriverRecord, DriverRegistry, RaceLaps};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Length of the driver code prefix on every lap line.
pub const DRIVER_CODE_LEN: usize = 3;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File '{}' not found.", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Driver details line {line}: expected 4 comma-separated fields, found {found}")]
    InvalidDriverLine { line: usize, found: usize },
    #[error("Race file is empty, expected a race title on the first line")]
    EmptyFile,
    #[error("Lap line {line}: '{content}' is too short to hold a driver code and lap time")]
    InvalidLapLine { line: usize, content: String },
    #[error("Lap line {line}: could not convert '{value}' to a lap time")]
    InvalidLapTime { line: usize, value: String },
    #[error("Race '{title}' contains no lap records")]
    NoLaps { title: String },
}

/// Loads driver details and race lap files from disk.
pub struct DataLoader;

impl DataLoader {
    /// Load the driver details file (`code,team,car_number,full_name` per line).
    pub fn load_driver_details(path: &Path) -> Result<DriverRegistry, LoaderError> {
        let content = Self::read_file(path)?;
        let registry = Self::parse_driver_details(&content)?;
        debug!(
            target: "loader",
            "loaded {} drivers from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Parse driver details from the file contents.
    pub fn parse_driver_details(content: &str) -> Result<DriverRegistry, LoaderError> {
        let mut registry = DriverRegistry::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            let [code, team, car_number, full_name] = fields[..] else {
                return Err(LoaderError::InvalidDriverLine {
                    line: idx + 1,
                    found: fields.len(),
                });
            };

            let record = DriverRecord {
                code: code.to_string(),
                full_name: full_name.to_string(),
                team: team.to_string(),
                car_number: car_number.to_string(),
            };
            if let Some(previous) = registry.insert(record) {
                warn!(
                    target: "loader",
                    "driver code {} listed more than once, line {} replaces earlier entry",
                    previous.code,
                    idx + 1
                );
            }
        }

        Ok(registry)
    }

    /// Load a race file: title line followed by `<code><lap time>` lines.
    pub fn load_lap_data(path: &Path) -> Result<RaceLaps, LoaderError> {
        let content = Self::read_file(path)?;
        let race = Self::parse_lap_data(&content)?;
        debug!(
            target: "loader",
            "loaded {} laps for {} drivers from {}",
            race.lap_count(),
            race.drivers().len(),
            path.display()
        );
        Ok(race)
    }

    /// Parse a race file from its contents.
    pub fn parse_lap_data(content: &str) -> Result<RaceLaps, LoaderError> {
        let mut lines = content.lines().enumerate();
        let (_, title) = lines.next().ok_or(LoaderError::EmptyFile)?;
        let mut race = RaceLaps::new(title.trim());

        for (idx, raw) in lines {
            if raw.trim().is_empty() {
                continue;
            }

            let line = idx + 1;
            let (code, time) = Self::split_lap_line(raw).ok_or_else(|| {
                LoaderError::InvalidLapLine {
                    line,
                    content: raw.to_string(),
                }
            })?;
            let time = time.trim();
            let invalid_time = || LoaderError::InvalidLapTime {
                line,
                value: time.to_string(),
            };
            let lap: f64 = time.parse().map_err(|_| invalid_time())?;
            if !lap.is_finite() {
                return Err(invalid_time());
            }

            race.push_lap(code, lap);
        }

        if race.is_empty() {
            return Err(LoaderError::NoLaps { title: race.title });
        }

        Ok(race)
    }

    /// Split a lap line after the driver code, counting characters rather than bytes.
    fn split_lap_line(line: &str) -> Option<(&str, &str)> {
        let split_at = line
            .char_indices()
            .nth(DRIVER_CODE_LEN)
            .map(|(pos, _)| pos)?;
        Some(line.split_at(split_at))
    }

    fn read_file(path: &Path) -> Result<String, LoaderError> {
        fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoaderError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => LoaderError::Io {
                path: path.to_path_buf(),
                source,
            },
        })
    }
}
