//! Data Cleaner Module
//! Validates required columns and drops incomplete rows.

use log::info;
use polars::prelude::*;
use thiserror::Error;

/// Columns every chart relies on; rows missing any of them are dropped.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "release_year",
    "type",
    "country",
    "rating",
    "duration",
    "listed_in",
    "description",
];

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("The loaded table has no rows")]
    EmptyInput,
    #[error("The column '{0}' is missing from the table")]
    MissingColumn(String),
    #[error("The table is empty after cleaning")]
    AllRowsDropped,
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// The titles dataset after validation and missing-value removal.
///
/// Holding one of these is proof that the seven required columns exist and
/// that every row is complete in them, so chart builders can consume
/// `frame()` without repeating those checks.
#[derive(Debug, Clone)]
pub struct TitlesTable {
    df: DataFrame,
}

impl TitlesTable {
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }
}

/// Validate the loaded frame and drop rows with missing required values.
///
/// This is the single gate between loading and charting: every failure mode
/// of the input (no rows, absent column, nothing left after dropping) comes
/// back as a specific `CleanError` instead of leaking into the charts.
pub fn clean(df: DataFrame) -> Result<TitlesTable, CleanError> {
    if df.height() == 0 {
        return Err(CleanError::EmptyInput);
    }

    let columns = df.get_column_names();
    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c.as_str() == required) {
            return Err(CleanError::MissingColumn(required.to_string()));
        }
    }

    // Keep only rows complete in every required column.
    let mut complete = col(REQUIRED_COLUMNS[0]).is_not_null();
    for column in &REQUIRED_COLUMNS[1..] {
        complete = complete.and(col(*column).is_not_null());
    }
    let cleaned = df.lazy().filter(complete).collect()?;

    if cleaned.height() == 0 {
        return Err(CleanError::AllRowsDropped);
    }

    info!("cleaned table keeps {} rows", cleaned.height());
    Ok(TitlesTable { df: cleaned })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles_frame(countries: Vec<Option<&str>>) -> DataFrame {
        let n = countries.len();
        DataFrame::new(vec![
            Column::new("release_year".into(), vec![2020i64; n]),
            Column::new("type".into(), vec!["Movie"; n]),
            Column::new("country".into(), countries),
            Column::new("rating".into(), vec!["TV-MA"; n]),
            Column::new("duration".into(), vec!["90 min"; n]),
            Column::new("listed_in".into(), vec!["Dramas"; n]),
            Column::new("description".into(), vec!["A film."; n]),
        ])
        .unwrap()
    }

    #[test]
    fn drops_rows_with_missing_values() {
        let df = titles_frame(vec![Some("United States"), None, Some("France")]);
        let table = clean(df).unwrap();

        assert_eq!(table.height(), 2);
        for column in REQUIRED_COLUMNS {
            assert_eq!(table.frame().column(column).unwrap().null_count(), 0);
        }
    }

    #[test]
    fn keeps_complete_tables_intact() {
        let df = titles_frame(vec![Some("United States"), Some("India")]);
        let table = clean(df).unwrap();
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn reports_the_missing_column_by_name() {
        let df = titles_frame(vec![Some("United States")])
            .drop("duration")
            .unwrap();

        match clean(df) {
            Err(CleanError::MissingColumn(name)) => assert_eq!(name, "duration"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_input() {
        let df = titles_frame(vec![]);
        assert!(matches!(clean(df), Err(CleanError::EmptyInput)));
    }

    #[test]
    fn rejects_tables_where_every_row_is_incomplete() {
        let df = titles_frame(vec![None, None]);
        assert!(matches!(clean(df), Err(CleanError::AllRowsDropped)));
    }
}
