//! Board module - console timing board and interactive driver lookup

mod lookup;
mod table;

pub use lookup::DriverLookup;
pub use table::{build_results_table, format_time, print_driver_details, print_race_results};
