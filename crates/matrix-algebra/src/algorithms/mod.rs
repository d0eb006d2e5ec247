//! Stateless algorithms over [`Matrix`] values.
//!
//! Every function here returns a freshly allocated result and leaves its
//! inputs untouched. Shape preconditions are reported as
//! [`MatrixError::InvalidArgument`]; errors from the underlying operators
//! propagate unchanged.
//!
//! `power`, `determinant` and `evaluate_polynomial` run the reference
//! algorithm. Their `*_with` variants take an [`AlgebraConfig`] to select a
//! faster strategy, which agrees with the reference under exact arithmetic but
//! may round differently in floating point.
//!
//! [`AlgebraConfig`]: crate::config::AlgebraConfig
mod determinant;
mod polynomial;
mod power;

pub use determinant::{determinant, determinant_with};
pub use polynomial::{evaluate_polynomial, evaluate_polynomial_with};
pub use power::{power, power_with};

use crate::error::{MatrixError, Result};
use crate::math::Matrix;

/// Multiply every element of `matrix` by `lambda`, returning a new matrix.
pub fn scale(lambda: f64, matrix: &Matrix) -> Matrix {
    matrix.mapv(|v| v * lambda)
}

/// The `n x n` identity matrix.
pub fn identity(n: usize) -> Result<Matrix> {
    let mut data = Matrix::zeros(n)?.into_vec();
    for i in 0..n {
        data[i * n + i] = 1.0;
    }
    Ok(Matrix::from_raw(n, n, data))
}

/// Swap rows and columns: `result[(j, i)] == matrix[(i, j)]`.
pub fn transpose(matrix: &Matrix) -> Matrix {
    let (rows, cols) = matrix.order();
    let mut data = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        for i in 0..rows {
            data.push(matrix[(i, j)]);
        }
    }
    Matrix::from_raw(cols, rows, data)
}

/// `matrix` with row `row` and column `col` removed.
pub fn minor(matrix: &Matrix, row: usize, col: usize) -> Result<Matrix> {
    let (rows, cols) = matrix.order();
    if row >= rows || col >= cols {
        return Err(MatrixError::OutOfRange {
            row,
            col,
            rows,
            cols,
        });
    }
    if rows < 2 || cols < 2 {
        return Err(MatrixError::InvalidArgument(format!(
            "a {}x{} matrix has no minors",
            rows, cols
        )));
    }

    let mut data = Vec::with_capacity((rows - 1) * (cols - 1));
    for i in (0..rows).filter(|&i| i != row) {
        let values = matrix.row_slice(i);
        data.extend(
            values
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v),
        );
    }
    Ok(Matrix::from_raw(rows - 1, cols - 1, data))
}

fn require_square(matrix: &Matrix, what: &str) -> Result<usize> {
    if !matrix.is_square() {
        let (rows, cols) = matrix.order();
        return Err(MatrixError::InvalidArgument(format!(
            "{} requires a square matrix, got {}x{}",
            what, rows, cols
        )));
    }
    Ok(matrix.nrows())
}
