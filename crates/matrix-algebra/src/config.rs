use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy choices for the algorithms that have a faster equivalent of the
/// reference formulation.
///
/// The default selects the reference algorithms throughout.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AlgebraConfig {
    pub power: PowerStrategy,
    pub determinant: DeterminantStrategy,
    pub polynomial: PolynomialStrategy,
}

impl AlgebraConfig {
    pub fn new(
        power: PowerStrategy,
        determinant: DeterminantStrategy,
        polynomial: PolynomialStrategy,
    ) -> Self {
        Self {
            power,
            determinant,
            polynomial,
        }
    }
}

/// How `A^n` is computed.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PowerStrategy {
    /// `A * (A * (... * I))`, n products.
    #[default]
    Linear,
    /// Exponentiation by squaring, O(log n) products.
    Squaring,
}

/// How the determinant of an order >= 3 matrix is computed.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeterminantStrategy {
    /// Laplace expansion along the first row.
    #[default]
    Cofactor,
    /// Reduction to upper triangular form.
    Elimination,
}

/// How `sum(c_i * A^i)` is evaluated.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PolynomialStrategy {
    /// Add every scaled power to a zero accumulator.
    #[default]
    Direct,
    Horner,
}

impl FromStr for PowerStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(PowerStrategy::Linear),
            "squaring" => Ok(PowerStrategy::Squaring),
            _ => Err(format!(
                "Unknown power strategy: {}. Expected one of: linear, squaring",
                s
            )),
        }
    }
}

impl FromStr for DeterminantStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cofactor" => Ok(DeterminantStrategy::Cofactor),
            "elimination" => Ok(DeterminantStrategy::Elimination),
            _ => Err(format!(
                "Unknown determinant strategy: {}. Expected one of: cofactor, elimination",
                s
            )),
        }
    }
}

impl FromStr for PolynomialStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(PolynomialStrategy::Direct),
            "horner" => Ok(PolynomialStrategy::Horner),
            _ => Err(format!(
                "Unknown polynomial strategy: {}. Expected one of: direct, horner",
                s
            )),
        }
    }
}

impl fmt::Display for PowerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PowerStrategy::Linear => "linear",
            PowerStrategy::Squaring => "squaring",
        })
    }
}

impl fmt::Display for DeterminantStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeterminantStrategy::Cofactor => "cofactor",
            DeterminantStrategy::Elimination => "elimination",
        })
    }
}

impl fmt::Display for PolynomialStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PolynomialStrategy::Direct => "direct",
            PolynomialStrategy::Horner => "horner",
        })
    }
}
