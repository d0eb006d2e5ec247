use log::{debug, trace};

use super::{minor, require_square};
use crate::config::{AlgebraConfig, DeterminantStrategy};
use crate::error::Result;
use crate::math::Matrix;

/// Determinant of a square matrix by cofactor expansion along the first row.
///
/// Orders 1 and 2 use the closed forms; larger orders recurse over the
/// minors, which is O(n!) in the order.
///
/// # Errors
///
/// [`MatrixError::InvalidArgument`](crate::error::MatrixError::InvalidArgument)
/// when `matrix` is not square.
pub fn determinant(matrix: &Matrix) -> Result<f64> {
    determinant_with(matrix, &AlgebraConfig::default())
}

/// [`determinant`] with the strategy for orders >= 3 taken from `config`.
pub fn determinant_with(matrix: &Matrix, config: &AlgebraConfig) -> Result<f64> {
    let n = require_square(matrix, "determinant")?;
    debug!("determinant: order {}, strategy {}", n, config.determinant);

    match (n, config.determinant) {
        (1, _) | (2, _) => Ok(closed_form(matrix)),
        (_, DeterminantStrategy::Cofactor) => cofactor(matrix, 0),
        (_, DeterminantStrategy::Elimination) => Ok(elimination(matrix, n)),
    }
}

fn closed_form(matrix: &Matrix) -> f64 {
    if matrix.nrows() == 1 {
        matrix[(0, 0)]
    } else {
        matrix[(0, 0)] * matrix[(1, 1)] - matrix[(0, 1)] * matrix[(1, 0)]
    }
}

fn cofactor(matrix: &Matrix, depth: usize) -> Result<f64> {
    let n = matrix.nrows();
    if n <= 2 {
        return Ok(closed_form(matrix));
    }
    trace!("cofactor expansion: order {}, depth {}", n, depth);

    let mut det = 0.0;
    for j in 0..n {
        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
        let sub = cofactor(&minor(matrix, 0, j)?, depth + 1)?;
        det += sign * matrix[(0, j)] * sub;
    }
    Ok(det)
}

/// Gaussian elimination. Rows are swapped only to get past an exactly zero pivot.
fn elimination(matrix: &Matrix, n: usize) -> f64 {
    let mut a = matrix.to_rows();
    let mut det = 1.0;

    for k in 0..n {
        let Some(pivot) = (k..n).find(|&r| a[r][k] != 0.0) else {
            return 0.0;
        };
        if pivot != k {
            a.swap(pivot, k);
            det = -det;
        }
        for i in k + 1..n {
            let factor = a[i][k] / a[k][k];
            if factor == 0.0 {
                continue;
            }
            for j in k..n {
                let v = a[k][j];
                a[i][j] -= factor * v;
            }
        }
        det *= a[k][k];
    }
    det
}
