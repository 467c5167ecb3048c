//! # Encoding Policy Trait

use core::fmt::Debug;

use num_traits::Zero;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    errors::{WCResult, WordcoderError},
    types::TokenId,
};

/// The kind of an [`EncodingPolicy`].
///
/// Printed and parsed as kebab-case: `dictionary`, `bag-of-words`, `tf-idf`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Raw id sequences.
    Dictionary,

    /// Per-id counts.
    BagOfWords,

    /// TF-IDF weights.
    TfIdf,
}

/// Turns per-document id streams into output rows.
///
/// See the [module docs](crate::policies) for the state machine.
///
/// Only configuration is serialized; accumulators are transient,
/// and cleared by [`Self::reset`] at the start of every batch.
pub trait EncodingPolicy:
    Debug + Default + Clone + Send + Sync + Serialize + DeserializeOwned
{
    /// The numeric type of output cells.
    type Value: Copy + Zero + Debug + PartialEq + Send + Sync + 'static;

    /// The finalized, read-only view of a batch.
    type Rows<'a>: PolicyRows<Value = Self::Value>
    where
        Self: 'a;

    /// The kind of this policy.
    const KIND: PolicyKind;

    /// Clear all accumulators.
    fn reset(&mut self);

    /// Accumulate the next document of the batch.
    ///
    /// ## Arguments
    /// * `document` - the document's ids, in token order.
    fn accumulate(
        &mut self,
        document: &[TokenId],
    );

    /// The number of documents accumulated since the last reset.
    fn num_documents(&self) -> usize;

    /// Finish the batch.
    ///
    /// ## Arguments
    /// * `vocab_size` - the dictionary size after the whole batch.
    ///
    /// ## Returns
    /// The view rows are emitted from.
    fn finalize(
        &mut self,
        vocab_size: usize,
    ) -> Self::Rows<'_>;

    /// Configuration as ``(name, value)`` pairs, for the text state format.
    fn options(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Set one configuration value, by name.
    fn set_option(
        &mut self,
        name: &str,
        value: &str,
    ) -> WCResult<()> {
        Err(WordcoderError::Parse(format!(
            "{} policy has no option {name:?} (value {value:?})",
            Self::KIND
        )))
    }
}

/// Read-only access to the rows of a finalized batch.
pub trait PolicyRows {
    /// The numeric type of output cells.
    type Value: Copy + Zero;

    /// The number of rows (documents).
    fn num_rows(&self) -> usize;

    /// The unpadded length of a row.
    fn row_len(
        &self,
        document: usize,
    ) -> usize;

    /// Produce the unpadded row for a document.
    ///
    /// ## Panics
    /// If `document >= num_rows()`.
    fn emit(
        &self,
        document: usize,
    ) -> Vec<Self::Value>;

    /// The longest row length; `0` for an empty batch.
    fn max_row_len(&self) -> usize {
        (0..self.num_rows())
            .map(|document| self.row_len(document))
            .max()
            .unwrap_or(0)
    }
}
