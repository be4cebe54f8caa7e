//! Timing Board - race lap timing summarizer
//!
//! Loads a driver registry and race lap files, computes per-driver lap
//! statistics, prints a timing board, exports CSV results and shows lap charts.

pub mod board;
pub mod charts;
pub mod cli;
pub mod data;
pub mod export;
pub mod gui;
pub mod logging;
pub mod pipeline;
pub mod stats;
