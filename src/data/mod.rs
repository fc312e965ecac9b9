//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::{clean, CleanError, TitlesTable, REQUIRED_COLUMNS};
pub use loader::{load_titles, LoadError, DATA_FILE};
