//! matrix-algebra: dense real matrices and the classic algorithms over them.
//!
//! The crate is split into the [`Matrix`](math::Matrix) value type with its
//! shape-checked operators, a set of stateless [`algorithms`] (scalar product,
//! transpose, integer power, determinant, polynomial evaluation) and an
//! [`AlgebraConfig`](config::AlgebraConfig) that selects between reference
//! and faster strategies.
//!
//! The library only logs through the `log` facade; installing a logger is left
//! to the binary.
pub mod algorithms;
pub mod config;
pub mod error;
pub mod math;

pub use error::{MatrixError, Result};
pub use math::Matrix;
