//! # Token Dictionary Trait

use core::{borrow::Borrow, fmt::Debug};

use crate::{
    errors::{WCResult, WordcoderError},
    types::{TokenId, UNKNOWN_ID},
};

/// Common interface of token dictionaries.
///
/// `Q` is the borrowed token form accepted for lookup and insertion;
/// the dictionary stores canonical [`Self::Owned`] copies, so tokens
/// borrowed from transient line buffers never outlive the encode call.
///
/// ## Invariants
/// * ids are `1..=size()`, assigned in first-seen order;
/// * no two tokens share an id;
/// * tokens are never removed or renumbered.
pub trait TokenDictionary<Q: ?Sized>: Debug + Default + Clone + PartialEq + Send + Sync {
    /// The owned, canonical token representation.
    type Owned: Borrow<Q> + Clone + Debug + 'static;

    /// Look up the id of a token.
    ///
    /// ## Returns
    /// The id, or `None` if the token has never been inserted.
    fn lookup(
        &self,
        token: &Q,
    ) -> Option<TokenId>;

    /// Return the id of a token, inserting it if unseen.
    ///
    /// A new token is copied into the dictionary and assigned
    /// the id `size() + 1`. This never fails.
    fn insert_or_get(
        &mut self,
        token: &Q,
    ) -> TokenId;

    /// The owned tokens, in first-seen (id) order.
    ///
    /// The token at position `i` has id `i + 1`.
    fn tokens(&self) -> &[Self::Owned];

    /// Does the dictionary contain the token?
    fn has_token(
        &self,
        token: &Q,
    ) -> bool {
        self.lookup(token).is_some()
    }

    /// The id of a token; [`UNKNOWN_ID`] if absent.
    fn value(
        &self,
        token: &Q,
    ) -> TokenId {
        self.lookup(token).unwrap_or(UNKNOWN_ID)
    }

    /// The number of distinct tokens.
    fn size(&self) -> usize {
        self.tokens().len()
    }

    /// Is the dictionary empty?
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The token with the given id, if any.
    fn token(
        &self,
        id: TokenId,
    ) -> Option<&Self::Owned> {
        id.checked_sub(1).and_then(|idx| self.tokens().get(idx))
    }

    /// Enumerate ``(token, id)`` associations.
    ///
    /// The enumeration order is unspecified.
    fn mapping(&self) -> impl Iterator<Item = (&Self::Owned, TokenId)> {
        self.tokens()
            .iter()
            .enumerate()
            .map(|(idx, token)| (token, idx + 1))
    }

    /// Rebuild a dictionary from persisted ``(token, id)`` pairs.
    ///
    /// ## Arguments
    /// * `pairs` - the pairs, in canonical order.
    ///
    /// ## Returns
    /// The dictionary; or [`WordcoderError::Deserialization`] if the ids are
    /// not exactly `1..=n` in order, or a token repeats.
    fn try_from_pairs<I>(pairs: I) -> WCResult<Self>
    where
        I: IntoIterator<Item = (Self::Owned, TokenId)>,
    {
        let mut dictionary = Self::default();
        for (idx, (token, id)) in pairs.into_iter().enumerate() {
            let expected = idx + 1;
            if id != expected {
                return Err(WordcoderError::Deserialization(format!(
                    "token {token:?} has id {id}, expected {expected}"
                )));
            }

            let key: &Q = token.borrow();
            if dictionary.has_token(key) {
                return Err(WordcoderError::Deserialization(format!(
                    "duplicate token {token:?} at id {id}"
                )));
            }
            dictionary.insert_or_get(key);
        }
        Ok(dictionary)
    }
}
