//! `serde` support.
//!
//! A matrix serializes as a sequence of rows.
//! Deserializing applies the same check as
//! [`SquareMatrix::from_rows`].

use crate::matrix::SquareMatrix;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for SquareMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SquareMatrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
impl<T: Serialize> SquareMatrix<T> {
    /// Return the matrix as a JSON array of rows.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Json`](crate::MatrixError::Json) if
    /// `serde_json` fails, for example on a non-finite float.
    pub fn as_json_string(&self) -> Result<String, crate::MatrixError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Build a matrix from a JSON array of rows.
///
/// # Errors
///
/// [`MatrixError::Json`](crate::MatrixError::Json) for malformed
/// JSON and for rows that do not form a square.
///
/// ```
/// let m: sqmat::SquareMatrix<i32> = sqmat::loads_json("[[1, 2], [3, 4]]").unwrap();
/// assert_eq!(m.sum_diagonal_minor(), 5);
/// ```
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn loads_json<T>(json: &str) -> Result<SquareMatrix<T>, crate::MatrixError>
where
    T: serde::de::DeserializeOwned,
{
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_rows() {
        let m = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");
        let back: SquareMatrix<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn test_empty() {
        let m = SquareMatrix::<f64>::new(0);
        assert_eq!(serde_json::to_string(&m).unwrap(), "[]");
        let back: SquareMatrix<f64> = serde_json::from_str("[]").unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rv = serde_json::from_str::<SquareMatrix<i32>>("[[1, 2], [3]]");
        let e = rv.unwrap_err();
        assert!(e.to_string().contains("not a square matrix"));
    }
}
