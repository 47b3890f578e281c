//! Error types for the expression generator core engine

use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the expression generator core engine
#[derive(Error, Debug)]
pub enum ExprGenError {
    #[error("Generation failure: {0}")]
    GenerationFailure(String),

    #[error("Malformed generator reply: {0}")]
    MalformedOutput(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column kind mismatch: {0}")]
    ColumnKindMismatch(String),

    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Unsupported group operator: {0}")]
    UnsupportedGroupOperator(String),

    #[error("Unsupported function: {0}")]
    UnsupportedFunction(String),

    #[error("Invalid operand type: {0}")]
    InvalidOperandType(String),

    #[error("Range operator '{operator}' expects exactly two operand values, got {count}")]
    InvalidRangeOperand { operator: String, count: usize },

    #[error("Invalid column kind: {0}")]
    InvalidColumnKind(String),

    #[error("Dataset not initialized. Call init_dataset() first.")]
    DatasetNotInitialized,
}

impl From<ExprGenError> for PyErr {
    fn from(err: ExprGenError) -> PyErr {
        match err {
            ExprGenError::GenerationFailure(msg) => {
                PyRuntimeError::new_err(format!("Generation failure: {}", msg))
            }
            ExprGenError::MalformedOutput(msg) => {
                PyValueError::new_err(format!("Malformed generator reply: {}", msg))
            }
            ExprGenError::UnknownColumn(name) => {
                PyKeyError::new_err(format!("Unknown column: {}", name))
            }
            ExprGenError::ColumnKindMismatch(msg) => {
                PyValueError::new_err(format!("Column kind mismatch: {}", msg))
            }
            ExprGenError::UnsupportedOperator(op) => {
                PyValueError::new_err(format!("Unsupported operator: {}", op))
            }
            ExprGenError::UnsupportedGroupOperator(op) => {
                PyValueError::new_err(format!("Unsupported group operator: {}", op))
            }
            ExprGenError::UnsupportedFunction(name) => {
                PyValueError::new_err(format!("Unsupported function: {}", name))
            }
            ExprGenError::InvalidOperandType(msg) => {
                PyValueError::new_err(format!("Invalid operand type: {}", msg))
            }
            err @ ExprGenError::InvalidRangeOperand { .. } => {
                PyValueError::new_err(err.to_string())
            }
            ExprGenError::InvalidColumnKind(kind) => {
                PyValueError::new_err(format!("Invalid column kind: {}", kind))
            }
            err @ ExprGenError::DatasetNotInitialized => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Result type alias for the expression generator core engine
pub type Result<T> = std::result::Result<T, ExprGenError>;
