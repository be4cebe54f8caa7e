//! CSV Results Export Module
//! Writes a race report as CSV: a title row, a header row, then one row per driver.

use crate::data::{ProcessorError, RaceReport};
use polars::prelude::*;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Races whose result files have fixed names.
const KNOWN_RACE_FILES: [(&str, &str); 3] = [
    ("Dewsberry", "dewsberry.csv"),
    ("Dewsberry 2", "dewsberry_2.csv"),
    ("York", "york.csv"),
];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write race results to '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write race results to '{}'", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error(transparent)]
    Table(#[from] ProcessorError),
}

/// Lowercase `title` and replace spaces and path separators with `_`.
pub fn file_stem(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect::<String>()
        .to_lowercase()
}

/// CSV writer for race reports
pub struct CsvExporter;

impl CsvExporter {
    /// File name used for a race's results.
    pub fn results_file_name(title: &str) -> String {
        if let Some((_, file)) = KNOWN_RACE_FILES.iter().find(|(race, _)| *race == title) {
            return file.to_string();
        }

        format!("{}_results.csv", file_stem(title))
    }

    /// Write `report` into `output_dir`, returning the path of the new file.
    pub fn save_results(report: &RaceReport, output_dir: &Path) -> Result<PathBuf, ExportError> {
        let path = output_dir.join(Self::results_file_name(&report.title));
        let io_err = |source| ExportError::Io {
            path: path.clone(),
            source,
        };

        // No file is created unless the table builds.
        let mut df = report.to_dataframe()?;

        if !output_dir.as_os_str().is_empty() {
            fs::create_dir_all(output_dir).map_err(io_err)?;
        }
        let file = File::create(&path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", Self::quote_field(&report.title)).map_err(io_err)?;
        CsvWriter::new(&mut writer)
            .include_header(true)
            .finish(&mut df)
            .map_err(|source| ExportError::Csv {
                path: path.clone(),
                source,
            })?;
        writer.flush().map_err(io_err)?;

        Ok(path)
    }

    /// Quote a single CSV field when it contains a separator, quote or line break.
    pub fn quote_field(value: &str) -> String {
        if value.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}
