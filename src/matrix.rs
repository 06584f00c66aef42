use crate::error::MatrixError;
use crate::traits::Element;
use num_traits::One;

/// Width of each field when a matrix is formatted with `{}`.
pub const DISPLAY_WIDTH: usize = 8;

/// An `N x N` grid of values.
///
/// Storage is a single row-major buffer, so element `(i, j)`
/// lives at `i * size + j`.
/// The size is fixed when the matrix is created.
///
/// # Examples
///
/// ```
/// let a = sqmat::SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = sqmat::SquareMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = (&a * &b).unwrap();
/// assert_eq!(c.get_value(0, 0).unwrap(), 19);
/// assert_eq!(c.get_value(1, 1).unwrap(), 50);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    size: usize,
}

impl<T> SquareMatrix<T> {
    /// Build a matrix from a vector of rows.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] if any row length
    /// differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            let msg = format!(
                "input is not a square matrix: row {} has {} elements, expected {}",
                i,
                row.len(),
                size
            );
            return Err(MatrixError::InvalidArgument(msg));
        }
        let data = rows.into_iter().flatten().collect::<Vec<_>>();
        Ok(Self::from_row_major(size, data))
    }

    pub(crate) fn from_row_major(size: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(Some(data.len()), size.checked_mul(size));
        Self { data, size }
    }

    /// The side length `N`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// `true` for the `0 x 0` matrix.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The row-major element buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn check_index(&self, what: &str, index: usize) -> Result<(), MatrixError> {
        if index >= self.size {
            Err(MatrixError::index_out_of_range(what, index, self.size))
        } else {
            Ok(())
        }
    }

    fn offset(&self, row: usize, column: usize) -> Result<usize, MatrixError> {
        self.check_index("row", row)?;
        self.check_index("column", column)?;
        Ok(row * self.size + column)
    }

    fn check_same_size(&self, op: &str, other: &Self) -> Result<(), MatrixError> {
        if self.size != other.size {
            Err(MatrixError::size_mismatch(op, self.size, other.size))
        } else {
            Ok(())
        }
    }

    /// Get a reference to row `row`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if `row >= size`.
    pub fn row(&self, row: usize) -> Result<&[T], MatrixError> {
        self.check_index("row", row)?;
        let start = row * self.size;
        Ok(&self.data[start..start + self.size])
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks(0) panics; an empty buffer yields nothing either way
        self.data.chunks(self.size.max(1))
    }

    /// Overwrite the element at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if either index is `>= size`.
    pub fn set_value(&mut self, row: usize, column: usize, value: T) -> Result<(), MatrixError> {
        let offset = self.offset(row, column)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Exchange the contents of two rows.
    ///
    /// Swapping a row with itself does nothing.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if either index is `>= size`.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<(), MatrixError> {
        self.check_index("row", r1)?;
        self.check_index("row", r2)?;
        if r1 != r2 {
            let n = self.size;
            for j in 0..n {
                self.data.swap(r1 * n + j, r2 * n + j);
            }
        }
        Ok(())
    }

    /// Exchange the contents of two columns.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if either index is `>= size`.
    pub fn swap_cols(&mut self, c1: usize, c2: usize) -> Result<(), MatrixError> {
        self.check_index("column", c1)?;
        self.check_index("column", c2)?;
        let n = self.size;
        for i in 0..n {
            self.data.swap(i * n + c1, i * n + c2);
        }
        Ok(())
    }
}

impl<T: Clone> SquareMatrix<T> {
    /// Get the element at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if either index is `>= size`.
    /// No index is valid for an empty matrix.
    ///
    /// ```
    /// let m = sqmat::SquareMatrix::<i32>::new(0);
    /// assert!(m.get_value(0, 0).is_err());
    /// ```
    pub fn get_value(&self, row: usize, column: usize) -> Result<T, MatrixError> {
        let offset = self.offset(row, column)?;
        Ok(self.data[offset].clone())
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value)
    }

    /// Copy the contents out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

impl<T: Element> SquareMatrix<T> {
    /// An `size x size` matrix of zeros.
    ///
    /// `size` may be zero.
    ///
    /// # Panics
    ///
    /// If `size * size` overflows `usize`.
    pub fn new(size: usize) -> Self {
        let len = size
            .checked_mul(size)
            .expect("matrix size overflows usize");
        Self::from_row_major(size, vec![T::zero(); len])
    }

    /// Ones on the major diagonal, zeros elsewhere.
    ///
    /// # Panics
    ///
    /// As [`SquareMatrix::new`].
    pub fn identity(size: usize) -> Self
    where
        T: One,
    {
        let mut rv = Self::new(size);
        for i in 0..size {
            rv.data[i * size + i] = T::one();
        }
        rv
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] if the sizes differ.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size("addition", other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a.clone() + b.clone())
            .collect::<Vec<_>>();
        Ok(Self::from_row_major(self.size, data))
    }

    /// Matrix product, `self * other`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] if the sizes differ.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size("multiplication", other)?;
        let n = self.size;
        let mut data = Vec::with_capacity(n * n);
        for row in self.rows() {
            for j in 0..n {
                let sum = row.iter().enumerate().fold(T::zero(), |acc, (k, a)| {
                    acc + a.clone() * other.data[k * n + j].clone()
                });
                data.push(sum);
            }
        }
        Ok(Self::from_row_major(n, data))
    }

    /// Sum of the elements from top-left to bottom-right.
    ///
    /// Zero for an empty matrix.
    pub fn sum_diagonal_major(&self) -> T {
        let n = self.size;
        (0..n).fold(T::zero(), |acc, i| acc + self.data[i * n + i].clone())
    }

    /// Sum of the elements from top-right to bottom-left.
    ///
    /// For odd sizes the centre element is shared with
    /// [`SquareMatrix::sum_diagonal_major`].
    pub fn sum_diagonal_minor(&self) -> T {
        let n = self.size;
        (0..n).fold(T::zero(), |acc, i| {
            acc + self.data[i * n + (n - 1 - i)].clone()
        })
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for SquareMatrix<T> {
    type Error = MatrixError;

    fn try_from(value: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(value)
    }
}

impl<'a, T: Element> std::ops::Add for &'a SquareMatrix<T> {
    type Output = Result<SquareMatrix<T>, MatrixError>;

    fn add(self, rhs: Self) -> Self::Output {
        SquareMatrix::add(self, rhs)
    }
}

impl<'a, T: Element> std::ops::Mul for &'a SquareMatrix<T> {
    type Output = Result<SquareMatrix<T>, MatrixError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for value in row {
                write!(f, "{:>width$}", value, width = DISPLAY_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
