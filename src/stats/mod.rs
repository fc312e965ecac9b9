//! Stats module - numeric helpers shared by the chart builders

mod calculator;

pub use calculator::{HistBin, StatsCalculator};
