//! # Bag-of-Words Encoding Policy

use serde::{Deserialize, Serialize};

use crate::{
    policies::{EncodingPolicy, PolicyKind, PolicyRows},
    types::{TokenId, UNKNOWN_ID, WCHashMap, hash_map_new},
};

/// Sparse ``(id, count)`` pairs for one document, sorted by id.
pub type TermCounts = Vec<(TokenId, usize)>;

/// Count the ids of one document.
///
/// [`UNKNOWN_ID`] entries are ignored.
pub fn count_terms(document: &[TokenId]) -> TermCounts {
    let mut counts: WCHashMap<TokenId, usize> = hash_map_new();
    for &id in document {
        if id != UNKNOWN_ID {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    let mut counts: TermCounts = counts.into_iter().collect();
    counts.sort_unstable_by_key(|&(id, _)| id);
    counts
}

/// Emits per-id counts for each document.
///
/// Every row is as long as the vocabulary at the end of the batch;
/// slot `i` holds the count of id `i + 1`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BagOfWordsPolicy {
    #[serde(skip)]
    counts: Vec<TermCounts>,
}

impl EncodingPolicy for BagOfWordsPolicy {
    type Value = usize;
    type Rows<'a> = CountRows<'a>;

    const KIND: PolicyKind = PolicyKind::BagOfWords;

    fn reset(&mut self) {
        self.counts.clear();
    }

    fn accumulate(
        &mut self,
        document: &[TokenId],
    ) {
        self.counts.push(count_terms(document));
    }

    fn num_documents(&self) -> usize {
        self.counts.len()
    }

    fn finalize(
        &mut self,
        vocab_size: usize,
    ) -> CountRows<'_> {
        CountRows {
            counts: &self.counts,
            vocab_size,
        }
    }
}

/// Finalized [`BagOfWordsPolicy`] batch.
#[derive(Debug, Clone, Copy)]
pub struct CountRows<'a> {
    counts: &'a [TermCounts],
    vocab_size: usize,
}

impl PolicyRows for CountRows<'_> {
    type Value = usize;

    fn num_rows(&self) -> usize {
        self.counts.len()
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
    ) -> Vec<usize> {
        let mut row = vec![0; self.vocab_size];
        for &(id, count) in &self.counts[document] {
            if let Some(slot) = row.get_mut(id - 1) {
                *slot = count;
            }
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_terms() {
        assert_eq!(count_terms(&[3, 1, 3, 0, 2, 3]), vec![(1, 1), (2, 1), (3, 3)]);
        assert!(count_terms(&[]).is_empty());
    }

    #[test]
    fn test_rows_use_final_vocab_size() {
        let mut policy = BagOfWordsPolicy::default();
        // The first document was seen when the vocabulary had 2 entries.
        policy.accumulate(&[1, 2, 1]);
        policy.accumulate(&[3, 4, 5]);

        let rows = policy.finalize(5);
        assert_eq!(rows.max_row_len(), 5);
        assert_eq!(rows.emit(0), vec![2, 1, 0, 0, 0]);
        assert_eq!(rows.emit(1), vec![0, 0, 1, 1, 1]);

        for document in 0..rows.num_rows() {
            let total: usize = rows.emit(document).iter().sum();
            assert_eq!(total, 3);
        }
    }
}
