//! In-place transposition of square matrices, stored row-major.
//!
//! Matrices here are flat `[f64]` slices with explicit dimensions, so
//! the transpose needs no allocation at all: element (i, j) swaps with
//! (j, i) across the main diagonal, touching each off-diagonal pair
//! exactly once.
//!
//! ## Usage
//!
//! ```
//! use transpose::transpose_in_place;
//!
//! let mut m = vec![1.0, 2.0, //
//!                  3.0, 4.0];
//!
//! transpose_in_place(&mut m, 2);
//!
//! assert_eq!(m, vec![1.0, 3.0, //
//!                    2.0, 4.0]);
//! ```
//!
//! An out-of-place [`transpose`] is also provided for rectangular
//! matrices, and [`print_matrix`] renders a matrix to stdout one row
//! per line.

pub mod matrix;

pub use matrix::print::{print_matrix, write_matrix};
pub use matrix::transpose::{transpose, transpose_in_place};
