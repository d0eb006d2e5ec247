//! The dense `Matrix` value type and its conversions.
//!
//! `Matrix` owns a row-major `Vec<f64>` and exposes checked element access,
//! exact equality and the shape-checked `add`, `sub` and `mul` operators.
//! Interop with `ndarray` lives in [`interop`].
pub mod interop;
pub mod matrix;

pub use matrix::Matrix;
