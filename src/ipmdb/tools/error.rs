use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool loads, merges, or exports the database tables.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when a source workbook path does not exist or cannot be opened.
    #[error("source workbook unavailable: {0}")]
    SourceUnavailable(PathBuf),

    /// Raised when a source workbook lacks a table required by the schema.
    #[error("{source_name} workbook is missing table '{table}'")]
    MissingTable { source_name: String, table: String },

    /// Raised when the two sources disagree on a table's column set.
    #[error(
        "column mismatch in table '{table}': primary has [{primary}], secondary has [{secondary}]"
    )]
    ColumnMismatch {
        table: String,
        primary: String,
        secondary: String,
    },

    /// Raised when the output directory cannot be cleared or a table file
    /// cannot be written.
    #[error("failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
