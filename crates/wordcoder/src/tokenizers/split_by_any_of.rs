//! # Delimiter-Splitting Tokenizer

use crate::tokenizers::{LineCursor, Tokenizer};

/// Splits a line into maximal runs of non-delimiter characters.
///
/// Runs of delimiters, including leading and trailing ones,
/// never produce empty tokens.
///
/// ## Style Hints
/// Instance names should prefer `tokenizer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitByAnyOf {
    /// Lookup table for ASCII delimiters.
    ascii: [bool; 128],

    /// Sorted, deduplicated non-ASCII delimiters.
    extended: Vec<char>,
}

impl Default for SplitByAnyOf {
    fn default() -> Self {
        Self::whitespace()
    }
}

impl SplitByAnyOf {
    /// Build a tokenizer splitting on any character of `delimiters`.
    ///
    /// ## Arguments
    /// * `delimiters` - the delimiter set; order and duplicates are ignored.
    pub fn new(delimiters: &str) -> Self {
        Self::from_chars(delimiters.chars())
    }

    /// Build a tokenizer splitting on any of the given characters.
    pub fn from_chars<I>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut ascii = [false; 128];
        let mut extended = Vec::new();
        for c in delimiters {
            if c.is_ascii() {
                ascii[c as usize] = true;
            } else {
                extended.push(c);
            }
        }
        extended.sort_unstable();
        extended.dedup();
        Self { ascii, extended }
    }

    /// Split on `' '`, `'\t'`, `'\n'` and `'\r'`.
    pub fn whitespace() -> Self {
        Self::new(" \t\n\r")
    }

    /// Is `c` a delimiter?
    #[inline(always)]
    pub fn is_delimiter(
        &self,
        c: char,
    ) -> bool {
        if c.is_ascii() {
            self.ascii[c as usize]
        } else {
            self.extended.binary_search(&c).is_ok()
        }
    }

    /// The delimiter set, in code point order.
    pub fn delimiters(&self) -> Vec<char> {
        (0u8..128)
            .filter(|&b| self.ascii[b as usize])
            .map(char::from)
            .chain(self.extended.iter().copied())
            .collect()
    }
}

impl Tokenizer for SplitByAnyOf {
    type Token = str;

    fn next_token<'a>(
        &self,
        cursor: &mut LineCursor<'a>,
    ) -> Option<&'a str> {
        let rest = cursor.remaining();

        let Some(start) = rest.find(|c: char| !self.is_delimiter(c)) else {
            cursor.advance(rest.len());
            return None;
        };

        let body = &rest[start..];
        let len = body.find(|c: char| self.is_delimiter(c)).unwrap_or(body.len());

        cursor.advance(start + len);
        Some(&body[..len])
    }
}
