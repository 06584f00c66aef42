use thiserror::Error;

/// Error type for this crate.
///
/// Every fallible operation on a [`SquareMatrix`](crate::SquareMatrix)
/// checks its arguments before touching any element, so an `Err`
/// always leaves the matrix as it was.
///
/// # Example
///
/// Rows of differing length do not make a square matrix:
///
/// ```
/// let rows = vec![vec![1, 2], vec![3, 4, 5]];
/// assert!(matches!(
///     sqmat::SquareMatrix::from_rows(rows),
///     Err(sqmat::MatrixError::InvalidArgument(_))
/// ));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatrixError {
    /// Non-square input, or operands of different sizes.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A row or column index was `>= size`.
    #[error("index out of range: {0}")]
    OutOfRange(String),
    #[error(transparent)]
    /// Errors opening or reading a text source.
    ///
    /// A missing file is reported with
    /// [`std::io::ErrorKind::NotFound`].
    Io(#[from] std::io::Error),
    /// A token could not be converted, or the input ended early.
    #[error("parse error: {0}")]
    ParseError(String),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    #[error(transparent)]
    /// Errors coming from `serde_json`.
    Json(#[from] serde_json::Error),
}

impl MatrixError {
    pub(crate) fn index_out_of_range(what: &str, index: usize, size: usize) -> Self {
        Self::OutOfRange(format!("{what} index {index} >= size {size}"))
    }

    pub(crate) fn size_mismatch(op: &str, lhs: usize, rhs: usize) -> Self {
        Self::InvalidArgument(format!(
            "matrix sizes don't match for {op}: {lhs}x{lhs} vs {rhs}x{rhs}"
        ))
    }
}
