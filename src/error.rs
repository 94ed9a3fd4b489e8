// src/error.rs
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Bad input shape. Fatal to the current query; no partial table is usable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataFormatError {
    #[error("{table}: column '{column}' not found")]
    MissingColumn { table: &'static str, column: String },

    #[error("{table}: unparseable date '{value}' (row {row})")]
    BadDate { table: &'static str, row: usize, value: String },

    #[error("{table}: empty '{column}' (row {row})")]
    EmptyCell { table: &'static str, row: usize, column: String },

    #[error("{table}: '{team}' listed as both home and away (row {row})")]
    SameTeam { table: &'static str, row: usize, team: String },

    #[error("{table}: malformed row: {message}")]
    Csv { table: &'static str, message: String },
}

/// Reading a table from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] DataFormatError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}
