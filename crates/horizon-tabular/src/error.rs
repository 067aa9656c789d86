//! Error types for table models.

use std::path::PathBuf;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur when querying or mutating a table model.
///
/// Out-of-range indices are integration bugs in the host: they are reported,
/// never clamped. A failed mutation leaves the model untouched.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Row index outside the current row collection.
    #[error("Row {row} out of range (row count {row_count})")]
    RowOutOfRange { row: usize, row_count: usize },

    /// Column index outside the column set.
    #[error("Column {column} out of range (column count {column_count})")]
    ColumnOutOfRange { column: usize, column_count: usize },

    /// Sort requested on a column that does not exist.
    #[error("Cannot sort by column {column} (column count {column_count})")]
    InvalidSortTarget { column: usize, column_count: usize },

    /// Dataset configuration file could not be read.
    #[error("Failed to read dataset config '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset configuration could not be parsed or is invalid.
    #[error("Invalid dataset config '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },
}

impl ModelError {
    /// Create a row range error.
    pub fn row_out_of_range(row: usize, row_count: usize) -> Self {
        Self::RowOutOfRange { row, row_count }
    }

    /// Create a column range error.
    pub fn column_out_of_range(column: usize, column_count: usize) -> Self {
        Self::ColumnOutOfRange {
            column,
            column_count,
        }
    }

    /// Create an invalid sort target error.
    pub fn invalid_sort_target(column: usize, column_count: usize) -> Self {
        Self::InvalidSortTarget {
            column,
            column_count,
        }
    }

    /// Create a config I/O error.
    pub fn config(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse error.
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for the out-of-range family of errors.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::RowOutOfRange { .. } | Self::ColumnOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ModelError::row_out_of_range(5, 3);
        assert_eq!(err.to_string(), "Row 5 out of range (row count 3)");
        assert!(err.is_out_of_range());

        let err = ModelError::invalid_sort_target(9, 4);
        assert_eq!(err.to_string(), "Cannot sort by column 9 (column count 4)");
        assert!(!err.is_out_of_range());
    }
}
