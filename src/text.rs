//! The whitespace-delimited text format.
//!
//! ```text
//! <size> <type_flag>
//! <row0 col0> <row0 col1> ... <row0 col(size-1)>
//! ...
//! ```
//!
//! Any ASCII whitespace separates tokens. The type flag is read as an
//! integer and otherwise ignored. Tokens after the last element
//! are ignored.

use crate::error::MatrixError;
use crate::matrix::SquareMatrix;
use std::fmt::Display;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Type flag emitted by the writer.
pub const TYPE_FLAG: i64 = 0;

struct Tokens<'a> {
    input: &'a [u8],
    offset: usize,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            position: 0,
        }
    }

    fn next_token(&mut self) -> Option<&'a [u8]> {
        let rest = &self.input[self.offset..];
        let start = rest.iter().position(|b| !b.is_ascii_whitespace())?;
        let len = rest[start..]
            .iter()
            .position(|b| b.is_ascii_whitespace())
            .unwrap_or(rest.len() - start);
        self.offset += start + len;
        Some(&rest[start..start + len])
    }

    // Tokens are only decoded when they are needed, so anything
    // after the last element may be arbitrary bytes.
    fn next_as<V>(&mut self, what: &str) -> Result<V, MatrixError>
    where
        V: FromStr,
        V::Err: Display,
    {
        let position = self.position;
        let bytes = self.next_token().ok_or_else(|| {
            MatrixError::ParseError(format!(
                "unexpected end of input at token {position}, expected {what}"
            ))
        })?;
        self.position += 1;
        let token = std::str::from_utf8(bytes).map_err(|e| {
            MatrixError::ParseError(format!("token {position} ({what}) {bytes:?}: {e}"))
        })?;
        token.parse::<V>().map_err(|e| {
            MatrixError::ParseError(format!("token {position} ({what}) {token:?}: {e}"))
        })
    }

    fn has_more(&mut self) -> bool {
        self.next_token().is_some()
    }
}

fn parse<T>(input: &[u8]) -> Result<SquareMatrix<T>, MatrixError>
where
    T: FromStr,
    T::Err: Display,
{
    let mut tokens = Tokens::new(input);
    let size: usize = tokens.next_as("size")?;
    let type_flag: i64 = tokens.next_as("type flag")?;
    log::debug!("parsing {size}x{size} matrix, type flag {type_flag}");

    let count = size
        .checked_mul(size)
        .ok_or_else(|| MatrixError::ParseError(format!("size {size} is too large")))?;
    // a bogus header must not trigger a huge allocation
    let mut data = Vec::with_capacity(count.min(input.len()));
    for _ in 0..count {
        data.push(tokens.next_as::<T>("element")?);
    }
    if tokens.has_more() {
        log::trace!("ignoring tokens after element {count}");
    }
    Ok(SquareMatrix::from_row_major(size, data))
}

impl<T> SquareMatrix<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// Parse a matrix from a string.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ParseError`] if a token does not convert or
    /// the input ends before `size * size` elements were read.
    ///
    /// # Examples
    ///
    /// ```
    /// let m = sqmat::SquareMatrix::<i32>::loads("2 0\n1 2\n3 4\n").unwrap();
    /// assert_eq!(m.get_value(1, 0).unwrap(), 3);
    /// ```
    pub fn loads(input: &str) -> Result<Self, MatrixError> {
        parse(input.as_bytes())
    }

    /// Read and parse a matrix from any reader.
    ///
    /// # Errors
    ///
    /// As [`SquareMatrix::loads`], plus [`MatrixError::Io`]
    /// if reading fails. A token that is not valid UTF-8 is a
    /// [`MatrixError::ParseError`].
    pub fn load<R: Read>(mut reader: R) -> Result<Self, MatrixError> {
        let mut buf = vec![];
        let _ = reader.read_to_end(&mut buf)?;
        parse(&buf)
    }

    /// Read and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Io`] if the file cannot be opened or read;
    /// a missing file has kind [`std::io::ErrorKind::NotFound`].
    /// Otherwise as [`SquareMatrix::loads`].
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, MatrixError> {
        let path = path.as_ref();
        log::debug!("reading matrix from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::load(file)
    }
}

impl<T: Display> SquareMatrix<T> {
    /// Render in the text format, one row per line.
    ///
    /// Not to be confused with the [`Display`] output,
    /// which is padded for reading by people.
    ///
    /// ```
    /// let m = sqmat::SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.as_string(), "2 0\n1 2\n3 4\n");
    /// ```
    pub fn as_string(&self) -> String {
        let mut out = format!("{} {}\n", self.size(), TYPE_FLAG);
        for row in self.rows() {
            let line = row
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Write the text format to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), MatrixError> {
        writer.write_all(self.as_string().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Create (or truncate) the file at `path` and write the text format to it.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MatrixError> {
        let path = path.as_ref();
        log::debug!("writing {0}x{0} matrix to {1}", self.size(), path.display());
        let file = std::fs::File::create(path)?;
        self.write_to(std::io::BufWriter::new(file))
    }
}
