use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

/// Dense row-major matrix of `f64`.
///
/// The order is fixed at construction and both dimensions are positive.
/// Equality is exact element-wise `==` on matrices of the same order, so
/// `NaN` never compares equal and `0.0 == -0.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Square zero matrix of order `n`.
    pub fn zeros(n: usize) -> Result<Self> {
        Self::zeros_with_shape(n, n)
    }

    /// Zero matrix with `rows` rows and `cols` columns.
    pub fn zeros_with_shape(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self::from_raw(rows, cols, vec![0.0; len]))
    }

    /// Take ownership of a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::InvalidArgument(format!(
                "buffer of length {} does not fit a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self::from_raw(rows, cols, data))
    }

    /// Take ownership of a dense block given as a list of equally long rows.
    pub fn from_block(block: Vec<Vec<f64>>) -> Result<Self> {
        let rows = block.len();
        let cols = block.first().map_or(0, Vec::len);
        checked_len(rows, cols)?;
        if let Some(bad) = block.iter().position(|row| row.len() != cols) {
            return Err(MatrixError::InvalidArgument(format!(
                "row {} has {} elements, expected {}",
                bad,
                block[bad].len(),
                cols
            )));
        }
        let data = block.into_iter().flatten().collect();
        Ok(Self::from_raw(rows, cols, data))
    }

    /// Callers guarantee `data.len() == rows * cols` with both dimensions positive.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        Self { data, rows, cols }
    }

    /// `(rows, cols)`.
    pub fn order(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Bounds-checked element read.
    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[self.offset(row, col)])
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Vec<f64> {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)]).collect()
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Element-wise sum. Both operands must have the same order.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference. Both operands must have the same order.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `self.ncols() == other.nrows()`; the result is
    /// `self.nrows() x other.ncols()`. Each cell is accumulated from `0.0`
    /// over the inner index in increasing order.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::ShapeMismatch {
                op: "multiply",
                left: self.order(),
                right: other.order(),
            });
        }

        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            let lhs = self.row_slice(i);
            for j in 0..other.cols {
                let mut acc = 0.0;
                for (k, &a) in lhs.iter().enumerate() {
                    acc += a * other.data[other.offset(k, j)];
                }
                data.push(acc);
            }
        }
        Ok(Matrix::from_raw(self.rows, other.cols, data))
    }

    pub fn equals(&self, other: &Matrix) -> bool {
        self == other
    }

    pub fn not_equals(&self, other: &Matrix) -> bool {
        self != other
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.order() != other.order() {
            return Err(MatrixError::ShapeMismatch {
                op,
                left: self.order(),
                right: other.order(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix::from_raw(self.rows, self.cols, data))
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidArgument(format!(
            "matrix dimensions must be positive, got {}x{}",
            rows, cols
        )));
    }
    rows.checked_mul(cols).ok_or_else(|| {
        MatrixError::InvalidArgument(format!("{}x{} matrix is too large", rows, cols))
    })
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Panics when the index is out of range; use [`Matrix::at`] for a checked read.
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        &self.data[self.offset(index.0, index.1)]
    }
}

/// One line per row, values separated by a single space, every row newline-terminated.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", value)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(block: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_block(block)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}
