//! Generic square matrices.
//!
//! [`SquareMatrix`] stores an `N x N` grid of numbers and provides
//! bounds-checked element access, addition, multiplication,
//! diagonal sums, row and column swaps, and a small whitespace
//! text format (see [`text`]).
//!
//! Every fallible operation returns [`MatrixError`].
//!
//! # Example
//!
//! ```
//! let m = sqmat::loads::<i32>("3 0\n1 2 3\n4 5 6\n7 8 9\n").unwrap();
//! assert_eq!(m.sum_diagonal_major(), 15);
//! assert_eq!(m.sum_diagonal_minor(), 15);
//! ```

#![cfg_attr(doc_cfg, feature(doc_cfg))]

mod error;
mod matrix;
mod serde_support;
pub mod text;
mod traits;

pub use error::MatrixError;
pub use matrix::{SquareMatrix, DISPLAY_WIDTH};
pub use traits::Element;

#[cfg(feature = "json")]
pub use serde_support::loads_json;

use std::fmt::Display;
use std::str::FromStr;

/// Build a [`SquareMatrix`] from a string in the text format.
///
/// See [`SquareMatrix::loads`].
pub fn loads<T>(input: &str) -> Result<SquareMatrix<T>, MatrixError>
where
    T: FromStr,
    T::Err: Display,
{
    SquareMatrix::loads(input)
}

/// Build a [`SquareMatrix`] from a reader of the text format.
///
/// See [`SquareMatrix::load`].
pub fn load<T, R>(reader: R) -> Result<SquareMatrix<T>, MatrixError>
where
    T: FromStr,
    T::Err: Display,
    R: std::io::Read,
{
    SquareMatrix::load(reader)
}

/// Build a [`SquareMatrix`] from a file in the text format.
///
/// See [`SquareMatrix::read_from_file`].
pub fn read_from_file<T, P>(path: P) -> Result<SquareMatrix<T>, MatrixError>
where
    T: FromStr,
    T::Err: Display,
    P: AsRef<std::path::Path>,
{
    SquareMatrix::read_from_file(path)
}
