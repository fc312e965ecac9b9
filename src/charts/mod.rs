//! Charts module - figure building and egui_plot rendering

mod builder;
mod figure;
mod geo;
mod plotter;
mod text;

pub use builder::{build, ChartError};
pub use figure::{ChartKind, Figure};
pub use plotter::ChartPlotter;
