use thiserror::Error;

/// Errors raised while building a tile grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("undefined edge type: '{value}'")]
    Validation { value: String },

    #[error("no row has been started")]
    State,

    #[error("grid is full: at most {limit} {what}")]
    Capacity { what: &'static str, limit: usize },

    #[error("tile inserted out of order: expected ({expected_row}, {expected_col}), got ({row}, {col})")]
    OutOfOrder {
        expected_row: usize,
        expected_col: usize,
        row: usize,
        col: usize,
    },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    Dimensions { width: usize, height: usize },
}
