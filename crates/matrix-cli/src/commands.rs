use anyhow::{Context, Result};
use std::path::Path;

use matrix_algebra::algorithms::{
    determinant_with, evaluate_polynomial_with, power_with, scale, transpose,
};
use matrix_algebra::config::AlgebraConfig;
use matrix_algebra::Matrix;

/// One operation requested on the command line, with its operands loaded.
#[derive(Debug, Clone)]
pub enum Operation {
    Add(Matrix, Matrix),
    Sub(Matrix, Matrix),
    Mul(Matrix, Matrix),
    Scale { lambda: f64, matrix: Matrix },
    Transpose(Matrix),
    Power { matrix: Matrix, exponent: i32 },
    Determinant(Matrix),
    Polynomial { matrix: Matrix, coefficients: Vec<f64> },
}

/// Result of an [`Operation`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matrix(Matrix),
    Scalar(f64),
}

impl Outcome {
    /// Display format for matrices, plain number for scalars; JSON when `json` is set.
    pub fn render(&self, json: bool) -> Result<String> {
        match (self, json) {
            (Outcome::Matrix(m), false) => Ok(m.to_display_string()),
            (Outcome::Scalar(v), false) => Ok(format!("{}\n", v)),
            (Outcome::Matrix(m), true) => Ok(serde_json::to_string(m)? + "\n"),
            (Outcome::Scalar(v), true) => Ok(serde_json::to_string(v)? + "\n"),
        }
    }
}

/// Read a matrix stored as a JSON array of rows.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read matrix: {}", path.as_ref().display()))?;
    let matrix: Matrix = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse matrix: {}", path.as_ref().display()))?;
    log::debug!(
        "Loaded {}x{} matrix from {}",
        matrix.nrows(),
        matrix.ncols(),
        path.as_ref().display()
    );
    Ok(matrix)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AlgebraConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: AlgebraConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Parse a comma-separated coefficient list such as `1,0,-2.5`.
///
/// Every token must be a number; empty tokens are rejected rather than
/// skipped so the polynomial degree is never silently changed.
pub fn parse_coefficients(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .map(|t| {
            t.parse::<f64>()
                .with_context(|| format!("Invalid coefficient: {:?}", t))
        })
        .collect()
}

pub fn run(operation: &Operation, config: &AlgebraConfig) -> Result<Outcome> {
    let outcome = match operation {
        Operation::Add(a, b) => Outcome::Matrix(a.add(b).context("Addition failed")?),
        Operation::Sub(a, b) => Outcome::Matrix(a.sub(b).context("Subtraction failed")?),
        Operation::Mul(a, b) => Outcome::Matrix(a.mul(b).context("Multiplication failed")?),
        Operation::Scale { lambda, matrix } => Outcome::Matrix(scale(*lambda, matrix)),
        Operation::Transpose(matrix) => Outcome::Matrix(transpose(matrix)),
        Operation::Power { matrix, exponent } => Outcome::Matrix(
            power_with(matrix, *exponent, config).context("Power failed")?,
        ),
        Operation::Determinant(matrix) => {
            Outcome::Scalar(determinant_with(matrix, config).context("Determinant failed")?)
        }
        Operation::Polynomial {
            matrix,
            coefficients,
        } => Outcome::Matrix(
            evaluate_polynomial_with(matrix, coefficients, config)
                .context("Polynomial evaluation failed")?,
        ),
    };
    Ok(outcome)
}
