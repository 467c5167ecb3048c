//! # Dictionary Encoding Policy

use serde::{Deserialize, Serialize};

use crate::{
    policies::{EncodingPolicy, PolicyKind, PolicyRows},
    types::TokenId,
};

/// Emits each document's id sequence unchanged.
///
/// Order and duplicates are preserved. Rows are as long as their
/// documents; matrix output pads them to the longest document.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DictionaryPolicy {
    #[serde(skip)]
    documents: Vec<Vec<TokenId>>,
}

impl EncodingPolicy for DictionaryPolicy {
    type Value = usize;
    type Rows<'a> = DictionaryRows<'a>;

    const KIND: PolicyKind = PolicyKind::Dictionary;

    fn reset(&mut self) {
        self.documents.clear();
    }

    fn accumulate(
        &mut self,
        document: &[TokenId],
    ) {
        self.documents.push(document.to_vec());
    }

    fn num_documents(&self) -> usize {
        self.documents.len()
    }

    fn finalize(
        &mut self,
        _vocab_size: usize,
    ) -> DictionaryRows<'_> {
        DictionaryRows {
            documents: &self.documents,
        }
    }
}

/// Finalized [`DictionaryPolicy`] batch.
#[derive(Debug, Clone, Copy)]
pub struct DictionaryRows<'a> {
    documents: &'a [Vec<TokenId>],
}

impl PolicyRows for DictionaryRows<'_> {
    type Value = usize;

    fn num_rows(&self) -> usize {
        self.documents.len()
    }

    fn row_len(
        &self,
        document: usize,
    ) -> usize {
        self.documents[document].len()
    }

    fn emit(
        &self,
        document: usize,
    ) -> Vec<usize> {
        self.documents[document].clone()
    }
}
