use log::debug;

use super::{identity, power_with, require_square, scale};
use crate::config::{AlgebraConfig, PolynomialStrategy};
use crate::error::{MatrixError, Result};
use crate::math::Matrix;

/// Evaluate `c[0] * A^0 + c[1] * A^1 + ... + c[n] * A^n` with `A^0 = I`.
///
/// Every coefficient contributes, including trailing zeros. An empty
/// coefficient list yields the zero matrix of `matrix`'s order.
///
/// # Errors
///
/// [`MatrixError::InvalidArgument`] when `matrix` is not square.
pub fn evaluate_polynomial(matrix: &Matrix, coefficients: &[f64]) -> Result<Matrix> {
    evaluate_polynomial_with(matrix, coefficients, &AlgebraConfig::default())
}

/// [`evaluate_polynomial`] with the strategy taken from `config`.
///
/// The direct strategy computes each power with `config.power`.
pub fn evaluate_polynomial_with(
    matrix: &Matrix,
    coefficients: &[f64],
    config: &AlgebraConfig,
) -> Result<Matrix> {
    let n = require_square(matrix, "polynomial evaluation")?;
    debug!(
        "polynomial: order {}, degree {}, strategy {}",
        n,
        coefficients.len().saturating_sub(1),
        config.polynomial
    );

    match config.polynomial {
        PolynomialStrategy::Direct => direct(matrix, n, coefficients, config),
        PolynomialStrategy::Horner => horner(matrix, n, coefficients),
    }
}

fn direct(matrix: &Matrix, n: usize, coefficients: &[f64], config: &AlgebraConfig) -> Result<Matrix> {
    let mut acc = Matrix::zeros(n)?;
    for (i, &c) in coefficients.iter().enumerate() {
        let exponent = i32::try_from(i).map_err(|_| {
            MatrixError::InvalidArgument(format!("polynomial degree {} is too large", i))
        })?;
        acc = acc.add(&scale(c, &power_with(matrix, exponent, config)?))?;
    }
    Ok(acc)
}

fn horner(matrix: &Matrix, n: usize, coefficients: &[f64]) -> Result<Matrix> {
    let Some((&leading, rest)) = coefficients.split_last() else {
        return Matrix::zeros(n);
    };

    let eye = identity(n)?;
    let mut acc = scale(leading, &eye);
    for &c in rest.iter().rev() {
        acc = acc.mul(matrix)?.add(&scale(c, &eye))?;
    }
    Ok(acc)
}
