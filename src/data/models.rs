//! Plain data types produced by the loaders.

use std::collections::HashMap;

/// One entry of the driver details file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
    pub code: String,
    pub full_name: String,
    pub team: String,
    pub car_number: String,
}

/// Driver details keyed by driver code.
#[derive(Debug, Clone, Default)]
pub struct DriverRegistry {
    drivers: HashMap<String, DriverRecord>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced (if any).
    pub fn insert(&mut self, record: DriverRecord) -> Option<DriverRecord> {
        self.drivers.insert(record.code.clone(), record)
    }

    pub fn get(&self, code: &str) -> Option<&DriverRecord> {
        self.drivers.get(code)
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

/// Lap times of a single driver, in the order they appear in the race file.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverLaps {
    pub code: String,
    pub laps: Vec<f64>,
}

/// Contents of one race file.
///
/// Drivers keep first-appearance order so that evaluation and tie-breaking
/// are deterministic for a given file.
#[derive(Debug, Clone, Default)]
pub struct RaceLaps {
    pub title: String,
    drivers: Vec<DriverLaps>,
    index: HashMap<String, usize>,
}

impl RaceLaps {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            drivers: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a lap for `code`, creating the driver's sequence on first use.
    pub fn push_lap(&mut self, code: &str, lap: f64) {
        match self.index.get(code) {
            Some(&idx) => self.drivers[idx].laps.push(lap),
            None => {
                self.index.insert(code.to_string(), self.drivers.len());
                self.drivers.push(DriverLaps {
                    code: code.to_string(),
                    laps: vec![lap],
                });
            }
        }
    }

    pub fn drivers(&self) -> &[DriverLaps] {
        &self.drivers
    }

    pub fn get(&self, code: &str) -> Option<&DriverLaps> {
        self.index.get(code).map(|&idx| &self.drivers[idx])
    }

    /// Total number of lap records across all drivers.
    pub fn lap_count(&self) -> usize {
        self.drivers.iter().map(|d| d.laps.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}
