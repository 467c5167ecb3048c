//! # Encoder Output Types

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// How encoded rows are assembled.
///
/// Printed and parsed as kebab-case: `matrix`, `ragged`.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// One row per document, right-padded with `0` to the longest row.
    #[default]
    Matrix,

    /// One unpadded sequence per document ("one-pass" output).
    Ragged,
}

/// Encoded batch, in either [`OutputMode`].
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedOutput<V> {
    /// A ``(documents, width)`` zero-padded matrix.
    Matrix(Array2<V>),

    /// Per-document sequences.
    Ragged(Vec<Vec<V>>),
}

impl<V: Clone> EncodedOutput<V> {
    /// The mode this output was assembled in.
    pub fn mode(&self) -> OutputMode {
        match self {
            EncodedOutput::Matrix(_) => OutputMode::Matrix,
            EncodedOutput::Ragged(_) => OutputMode::Ragged,
        }
    }

    /// The number of documents (rows).
    pub fn num_documents(&self) -> usize {
        match self {
            EncodedOutput::Matrix(matrix) => matrix.nrows(),
            EncodedOutput::Ragged(rows) => rows.len(),
        }
    }

    /// Get the matrix, if in matrix mode.
    pub fn as_matrix(&self) -> Option<&Array2<V>> {
        match self {
            EncodedOutput::Matrix(matrix) => Some(matrix),
            EncodedOutput::Ragged(_) => None,
        }
    }

    /// Get the sequences, if in ragged mode.
    pub fn as_ragged(&self) -> Option<&[Vec<V>]> {
        match self {
            EncodedOutput::Matrix(_) => None,
            EncodedOutput::Ragged(rows) => Some(rows),
        }
    }

    /// Copy out the rows as vectors.
    ///
    /// Matrix rows keep their padding.
    pub fn to_rows(&self) -> Vec<Vec<V>> {
        match self {
            EncodedOutput::Matrix(matrix) => matrix.rows().into_iter().map(|row| row.to_vec()).collect(),
            EncodedOutput::Ragged(rows) => rows.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use ndarray::array;

    use super::*;

    #[test]
    fn test_output_accessors() {
        let matrix: EncodedOutput<usize> = EncodedOutput::Matrix(array![[1, 2, 0], [3, 4, 5]]);
        assert_eq!(matrix.mode(), OutputMode::Matrix);
        assert_eq!(matrix.num_documents(), 2);
        assert!(matrix.as_ragged().is_none());
        assert_eq!(matrix.to_rows(), vec![vec![1, 2, 0], vec![3, 4, 5]]);

        let ragged: EncodedOutput<usize> = EncodedOutput::Ragged(vec![vec![1, 2], vec![3, 4, 5]]);
        assert_eq!(ragged.mode(), OutputMode::Ragged);
        assert_eq!(ragged.num_documents(), 2);
        assert!(ragged.as_matrix().is_none());
        assert_eq!(ragged.as_ragged().unwrap()[0], vec![1, 2]);
    }

    #[test]
    fn test_output_mode_names() {
        assert_eq!(OutputMode::default(), OutputMode::Matrix);
        assert_eq!(OutputMode::Ragged.to_string(), "ragged");
        assert_eq!(OutputMode::from_str("matrix").unwrap(), OutputMode::Matrix);
    }
}
