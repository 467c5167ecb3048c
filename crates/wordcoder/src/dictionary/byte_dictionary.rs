//! # Direct-Indexed Byte Dictionary

use core::fmt::Debug;

use crate::{
    dictionary::TokenDictionary,
    types::{TokenId, UNKNOWN_ID},
};

/// Token dictionary for single-byte tokens.
///
/// Uses a ``[TokenId; 256]`` table indexed by byte value,
/// holding [`UNKNOWN_ID`] for unseen bytes; no hashing is involved.
#[derive(Clone, PartialEq)]
pub struct ByteDictionary {
    /// Table mapping from byte ordinal (position) to id.
    ids: [TokenId; 256],

    /// Seen bytes, in id order.
    tokens: Vec<u8>,
}

impl Debug for ByteDictionary {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ByteDictionary")
            .field("size", &self.tokens.len())
            .field("tokens", &self.tokens)
            .finish()
    }
}

impl Default for ByteDictionary {
    fn default() -> Self {
        Self {
            ids: [UNKNOWN_ID; 256],
            tokens: Vec::new(),
        }
    }
}

impl ByteDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The byte-ord => id table.
    ///
    /// Unseen bytes map to [`UNKNOWN_ID`].
    pub fn id_table(&self) -> &[TokenId; 256] {
        &self.ids
    }
}

impl TokenDictionary<u8> for ByteDictionary {
    type Owned = u8;

    #[inline(always)]
    fn lookup(
        &self,
        token: &u8,
    ) -> Option<TokenId> {
        match self.ids[*token as usize] {
            UNKNOWN_ID => None,
            id => Some(id),
        }
    }

    fn insert_or_get(
        &mut self,
        token: &u8,
    ) -> TokenId {
        let slot = &mut self.ids[*token as usize];
        if *slot == UNKNOWN_ID {
            self.tokens.push(*token);
            *slot = self.tokens.len();
        }
        *slot
    }

    fn tokens(&self) -> &[u8] {
        &self.tokens
    }

    #[inline(always)]
    fn value(
        &self,
        token: &u8,
    ) -> TokenId {
        self.ids[*token as usize]
    }

    fn size(&self) -> usize {
        self.tokens.len()
    }
}
