use std::error::Error;
use std::fmt;

/// Errors returned by matrix construction, access and algebra.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Element or minor index outside the matrix.
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Operand orders do not satisfy the operation's shape constraint.
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Precondition violated: non-square input, negative exponent, empty or ragged block.
    InvalidArgument(String),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::OutOfRange { row, col, rows, cols } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::ShapeMismatch { op, left, right } => write!(
                f,
                "cannot {} {}x{} and {}x{} matrices",
                op, left.0, left.1, right.0, right.1
            ),
            MatrixError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl Error for MatrixError {}

pub type Result<T> = std::result::Result<T, MatrixError>;
