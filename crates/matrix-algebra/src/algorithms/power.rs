use log::debug;

use super::{identity, require_square};
use crate::config::{AlgebraConfig, PowerStrategy};
use crate::error::{MatrixError, Result};
use crate::math::Matrix;

/// Raise a square matrix to a non-negative integer power.
///
/// `power(a, 0)` is the identity of `a`'s order and
/// `power(a, n) == a * power(a, n - 1)`, evaluated in exactly that product
/// order.
///
/// # Errors
///
/// [`MatrixError::InvalidArgument`] when `exponent < 0` or `matrix` is not square.
pub fn power(matrix: &Matrix, exponent: i32) -> Result<Matrix> {
    power_with(matrix, exponent, &AlgebraConfig::default())
}

/// [`power`] with the strategy taken from `config`.
pub fn power_with(matrix: &Matrix, exponent: i32, config: &AlgebraConfig) -> Result<Matrix> {
    let n = require_square(matrix, "power")?;
    if exponent < 0 {
        return Err(MatrixError::InvalidArgument(format!(
            "exponent must be non-negative, got {}",
            exponent
        )));
    }
    debug!(
        "power: order {}, exponent {}, strategy {}",
        n, exponent, config.power
    );

    match config.power {
        PowerStrategy::Linear => linear(matrix, n, exponent as u32),
        PowerStrategy::Squaring => squaring(matrix, n, exponent as u32),
    }
}

fn linear(matrix: &Matrix, n: usize, exponent: u32) -> Result<Matrix> {
    let mut acc = identity(n)?;
    for _ in 0..exponent {
        acc = matrix.mul(&acc)?;
    }
    Ok(acc)
}

fn squaring(matrix: &Matrix, n: usize, mut exponent: u32) -> Result<Matrix> {
    if exponent == 0 {
        return identity(n);
    }

    let mut base = matrix.clone();
    while exponent & 1 == 0 {
        base = base.mul(&base)?;
        exponent >>= 1;
    }
    let mut acc = base.clone();
    exponent >>= 1;
    while exponent > 0 {
        base = base.mul(&base)?;
        if exponent & 1 == 1 {
            acc = acc.mul(&base)?;
        }
        exponent >>= 1;
    }
    Ok(acc)
}
