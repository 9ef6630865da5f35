// src/error.rs
use thiserror::Error;

/// The input document is not shaped like a single-table export.
#[derive(Error, Debug)]
pub enum StructureError {
    #[error("no <table> element found in document")]
    MissingTable,

    #[error("body row {row} has {found} cells but the header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("required column {0:?} not present in table")]
    MissingColumn(String),
}

/// A single cell value does not match the shape its stage expects.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("name has no comma separator: {0:?}")]
    NoComma(String),

    #[error("not a currency amount: {0:?}")]
    BadAmount(String),

    #[error("empty name, nothing to derive an email from")]
    EmptyName,
}

/// Top-level error for a pipeline run. A `FormatError` is tagged with the
/// stage, row index, and offending value so the operator can fix the export.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("{stage} failed at row {row} on {value:?}: {source}")]
    Stage {
        stage: &'static str,
        row: usize,
        value: String,
        source: FormatError,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
