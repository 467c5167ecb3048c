//! # TF-IDF Encoding Policy

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{WCResult, WordcoderError},
    policies::{EncodingPolicy, PolicyKind, PolicyRows, TermCounts, count_terms},
    types::TokenId,
};

/// Term-frequency weighting for [`TfIdfPolicy`].
///
/// Printed and parsed as kebab-case.
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
pub enum TfKind {
    /// `1` if the term is present.
    Binary,

    /// The raw count of the term in the document.
    #[default]
    RawCount,

    /// The raw count divided by the document's token count.
    TermFrequency,

    /// `1 + ln(count)` for present terms.
    SublinearTf,
}

impl TfKind {
    /// Weight a term.
    ///
    /// ## Arguments
    /// * `count` - occurrences of the term in the document (`> 0`).
    /// * `document_len` - the document's token count.
    pub fn weight(
        &self,
        count: usize,
        document_len: usize,
    ) -> f64 {
        match self {
            TfKind::Binary => 1.0,
            TfKind::RawCount => count as f64,
            TfKind::TermFrequency => count as f64 / document_len as f64,
            TfKind::SublinearTf => 1.0 + (count as f64).ln(),
        }
    }
}

/// Inverse document frequency.
///
/// * unsmoothed: ``ln(N / df) + 1``;
/// * smoothed: ``ln((N + 1) / (df + 1)) + 1``.
///
/// Unsmoothed terms absent from the batch (`df == 0`) get `0`.
pub fn inverse_document_frequency(
    num_documents: usize,
    document_frequency: usize,
    smooth: bool,
) -> f64 {
    if smooth {
        ((num_documents + 1) as f64 / (document_frequency + 1) as f64).ln() + 1.0
    } else if document_frequency == 0 {
        0.0
    } else {
        (num_documents as f64 / document_frequency as f64).ln() + 1.0
    }
}

/// Per-batch TF-IDF accumulators.
#[derive(Debug, Default, Clone)]
struct TfIdfBatch {
    /// Sparse term counts per document.
    counts: Vec<TermCounts>,

    /// Token count per document.
    lengths: Vec<usize>,

    /// Documents containing id `i + 1`, at slot `i`.
    document_frequency: Vec<usize>,

    /// Idf for id `i + 1`, at slot `i`; filled by finalize.
    idf: Vec<f64>,
}

/// Emits TF-IDF weights for each document.
///
/// Slot `i` of a row is ``tf(i + 1, doc) * idf(i + 1)``; every row is as long
/// as the vocabulary at the end of the batch. Document frequencies cover
/// exactly the documents of the current batch.
///
/// The defaults, [`TfKind::RawCount`] and unsmoothed idf, give
/// ``count * (ln(N / df) + 1)``.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TfIdfPolicy {
    tf_kind: TfKind,
    smooth_idf: bool,

    #[serde(skip)]
    batch: TfIdfBatch,
}

impl TfIdfPolicy {
    /// Option name of the term-frequency weighting.
    pub const TF_KIND_OPTION: &'static str = "tf-kind";

    /// Option name of the idf smoothing flag.
    pub const SMOOTH_IDF_OPTION: &'static str = "smooth-idf";

    /// Create a policy with the given settings.
    pub fn new(
        tf_kind: TfKind,
        smooth_idf: bool,
    ) -> Self {
        Self {
            tf_kind,
            smooth_idf,
            batch: TfIdfBatch::default(),
        }
    }

    /// The term-frequency weighting.
    pub fn tf_kind(&self) -> TfKind {
        self.tf_kind
    }

    /// Set the term-frequency weighting.
    pub fn set_tf_kind(
        &mut self,
        tf_kind: TfKind,
    ) {
        self.tf_kind = tf_kind;
    }

    /// Set the term-frequency weighting and return the policy.
    pub fn with_tf_kind(
        mut self,
        tf_kind: TfKind,
    ) -> Self {
        self.set_tf_kind(tf_kind);
        self
    }

    /// Is idf smoothing enabled?
    pub fn smooth_idf(&self) -> bool {
        self.smooth_idf
    }

    /// Enable or disable idf smoothing.
    pub fn set_smooth_idf(
        &mut self,
        smooth_idf: bool,
    ) {
        self.smooth_idf = smooth_idf;
    }

    /// Enable or disable idf smoothing and return the policy.
    pub fn with_smooth_idf(
        mut self,
        smooth_idf: bool,
    ) -> Self {
        self.set_smooth_idf(smooth_idf);
        self
    }

    /// The idf of an id, as computed by the last finalize.
    ///
    /// `None` for ids outside the finalized vocabulary.
    pub fn idf(
        &self,
        id: TokenId,
    ) -> Option<f64> {
        id.checked_sub(1).and_then(|idx| self.batch.idf.get(idx).copied())
    }
}

impl EncodingPolicy for TfIdfPolicy {
    type Value = f64;
    type Rows<'a> = TfIdfRows<'a>;

    const KIND: PolicyKind = PolicyKind::TfIdf;

    fn reset(&mut self) {
        let batch = &mut self.batch;
        batch.counts.clear();
        batch.lengths.clear();
        batch.document_frequency.clear();
        batch.idf.clear();
    }

    fn accumulate(
        &mut self,
        document: &[TokenId],
    ) {
        let counts = count_terms(document);

        let frequency = &mut self.batch.document_frequency;
        if let Some(&(max_id, _)) = counts.last()
            && frequency.len() < max_id
        {
            frequency.resize(max_id, 0);
        }
        for &(id, _) in &counts {
            frequency[id - 1] += 1;
        }

        self.batch.counts.push(counts);
        self.batch.lengths.push(document.len());
    }

    fn num_documents(&self) -> usize {
        self.batch.counts.len()
    }

    fn finalize(
        &mut self,
        vocab_size: usize,
    ) -> TfIdfRows<'_> {
        let num_documents = self.num_documents();
        let smooth = self.smooth_idf;
        let frequency = &self.batch.document_frequency;

        self.batch.idf = (0..vocab_size)
            .map(|idx| {
                let df = frequency.get(idx).copied().unwrap_or(0);
                inverse_document_frequency(num_documents, df, smooth)
            })
            .collect();

        TfIdfRows {
            batch: &self.batch,
            tf_kind: self.tf_kind,
            vocab_size,
        }
    }

    fn options(&self) -> Vec<(String, String)> {
        vec![
            (Self::TF_KIND_OPTION.to_string(), self.tf_kind.to_string()),
            (
                Self::SMOOTH_IDF_OPTION.to_string(),
                self.smooth_idf.to_string(),
            ),
        ]
    }

    fn set_option(
        &mut self,
        name: &str,
        value: &str,
    ) -> WCResult<()> {
        let parse_error = |e: &dyn core::fmt::Display| {
            WordcoderError::Parse(format!("invalid {name} value {value:?}: {e}"))
        };

        match name {
            Self::TF_KIND_OPTION => {
                self.tf_kind = TfKind::from_str(value).map_err(|e| parse_error(&e))?;
            }
            Self::SMOOTH_IDF_OPTION => {
                self.smooth_idf = bool::from_str(value).map_err(|e| parse_error(&e))?;
            }
            _ => {
                return Err(WordcoderError::Parse(format!(
                    "{} policy has no option {name:?}",
                    Self::KIND
                )));
            }
        }
        Ok(())
    }
}

/// Finalized [`TfIdfPolicy`] batch.
#[derive(Debug, Clone, Copy)]
pub struct TfIdfRows<'a> {
    batch: &'a TfIdfBatch,
    tf_kind: TfKind,
    vocab_size: usize,
}

impl PolicyRows for TfIdfRows<'_> {
    type Value = f64;

    fn num_rows(&self) -> usize {
        self.batch.counts.len()
    }

    fn row_len(
        &self,
        _document: usize,
    ) -> usize {
        self.vocab_size
    }

    fn emit(
        &self,
        document: usize,
    ) -> Vec<f64> {
        let length = self.batch.lengths[document];
        let mut row = vec![0.0; self.vocab_size];
        for &(id, count) in &self.batch.counts[document] {
            if let Some(slot) = row.get_mut(id - 1) {
                *slot = self.tf_kind.weight(count, length) * self.batch.idf[id - 1];
            }
        }
        row
    }
}
