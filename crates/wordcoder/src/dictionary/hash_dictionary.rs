//! # Hash-Backed ``{ K -> TokenId }`` Dictionary

use core::{borrow::Borrow, fmt::Debug, hash::Hash};

use crate::{
    dictionary::TokenDictionary,
    types::{TokenId, WCHashMap, hash_map_new},
};

/// Token dictionary backed by a hash map.
///
/// Owns an ordered arena of canonical tokens (`tokens[id - 1]`),
/// and a ``{ K -> TokenId }`` index over it.
///
/// ## Style Hints
/// Instance names should prefer `dictionary`.
#[derive(Clone)]
pub struct HashDictionary<K> {
    /// Canonical tokens, in id order.
    tokens: Vec<K>,

    /// Map of ``{ K -> TokenId }``.
    map: WCHashMap<K, TokenId>,
}

impl<K: Debug> Debug for HashDictionary<K> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("HashDictionary")
            .field("size", &self.tokens.len())
            .field("tokens", &self.tokens)
            .finish()
    }
}

impl<K: PartialEq> PartialEq for HashDictionary<K> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        // The index is a function of the arena.
        self.tokens == other.tokens
    }
}

impl<K> Default for HashDictionary<K> {
    fn default() -> Self {
        Self {
            tokens: Vec::new(),
            map: hash_map_new(),
        }
    }
}

impl<K> HashDictionary<K>
where
    K: Hash + Eq,
{
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw ``{ K -> TokenId }`` index.
    pub fn map(&self) -> &WCHashMap<K, TokenId> {
        &self.map
    }
}

impl<K, Q> TokenDictionary<Q> for HashDictionary<K>
where
    K: Borrow<Q> + Hash + Eq + Clone + Debug + Send + Sync + 'static,
    Q: ?Sized + Hash + Eq + ToOwned<Owned = K>,
{
    type Owned = K;

    fn lookup(
        &self,
        token: &Q,
    ) -> Option<TokenId> {
        self.map.get(token).copied()
    }

    fn insert_or_get(
        &mut self,
        token: &Q,
    ) -> TokenId {
        if let Some(&id) = self.map.get(token) {
            return id;
        }

        let owned = token.to_owned();
        let id = self.tokens.len() + 1;
        self.map.insert(owned.clone(), id);
        self.tokens.push(owned);
        id
    }

    fn tokens(&self) -> &[K] {
        &self.tokens
    }

    fn size(&self) -> usize {
        self.tokens.len()
    }

    fn mapping(&self) -> impl Iterator<Item = (&K, TokenId)> {
        self.map.iter().map(|(token, &id)| (token, id))
    }
}
