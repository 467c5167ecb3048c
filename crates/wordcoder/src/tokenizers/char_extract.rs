//! # Character-Extraction Tokenizer

use crate::tokenizers::{LineCursor, Tokenizer};

/// Emits every byte of a line as its own token.
///
/// The alphabet is the `0..=255` byte range, so the
/// [`crate::dictionary::ByteDictionary`] direct table backs it.
/// Multi-byte UTF-8 characters yield one token per byte.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharExtract;

impl Tokenizer for CharExtract {
    type Token = u8;

    fn next_token<'a>(
        &self,
        cursor: &mut LineCursor<'a>,
    ) -> Option<&'a u8> {
        let byte = cursor.remaining_bytes().first()?;
        cursor.advance(1);
        Some(byte)
    }
}
