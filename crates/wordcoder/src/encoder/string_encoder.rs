//! # String Encoder

use core::{fmt::Debug, marker::PhantomData};

use ndarray::Array2;

use crate::{
    dictionary::{DictionaryToken, TokenDictionary},
    encoder::{EncodedOutput, OutputMode},
    errors::WCResult,
    io::{EncoderState, STATE_FORMAT_VERSION, check_state_header},
    policies::{BagOfWordsPolicy, DictionaryPolicy, EncodingPolicy, PolicyRows, TfIdfPolicy},
    tokenizers::Tokenizer,
    types::TokenId,
};

/// [`StringEncoder`] over the tokens of `Tk`, with policy `P`.
pub type TokenizerEncoder<Tk, P> = StringEncoder<<Tk as Tokenizer>::Token, P>;

/// Raw id sequence encoder for the tokens of `Tk`.
pub type DictionaryEncoding<Tk> = TokenizerEncoder<Tk, DictionaryPolicy>;

/// Bag-of-words encoder for the tokens of `Tk`.
pub type BagOfWordsEncoding<Tk> = TokenizerEncoder<Tk, BagOfWordsPolicy>;

/// TF-IDF encoder for the tokens of `Tk`.
pub type TfIdfEncoding<Tk> = TokenizerEncoder<Tk, TfIdfPolicy>;

/// Encodes batches of strings into numeric rows.
///
/// Owns one dictionary, chosen by the token kind `Q`, and one policy `P`.
/// Cloning deep-copies both; [`Self::take`] moves them out, leaving an
/// empty encoder behind.
///
/// Encoding mutates the dictionary; concurrent use of one encoder
/// needs external synchronization, or one encoder per worker.
///
/// ## Style Hints
/// Instance names should prefer `encoder`.
pub struct StringEncoder<Q: ?Sized + DictionaryToken, P> {
    dictionary: Q::Dictionary,
    policy: P,
    _token: PhantomData<fn(&Q)>,
}

impl<Q: ?Sized + DictionaryToken, P: Debug> Debug for StringEncoder<Q, P> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("StringEncoder")
            .field("dictionary", &self.dictionary)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<Q: ?Sized + DictionaryToken, P: Clone> Clone for StringEncoder<Q, P> {
    fn clone(&self) -> Self {
        Self {
            dictionary: self.dictionary.clone(),
            policy: self.policy.clone(),
            _token: PhantomData,
        }
    }
}

impl<Q: ?Sized + DictionaryToken, P: Default> Default for StringEncoder<Q, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<Q: ?Sized + DictionaryToken, P> StringEncoder<Q, P> {
    /// Create an encoder with an empty dictionary.
    ///
    /// ## Arguments
    /// * `policy` - the encoding policy.
    pub fn new(policy: P) -> Self {
        Self::from_parts(Q::Dictionary::default(), policy)
    }

    /// Create an encoder from an existing dictionary.
    pub fn from_parts(
        dictionary: Q::Dictionary,
        policy: P,
    ) -> Self {
        Self {
            dictionary,
            policy,
            _token: PhantomData,
        }
    }

    /// The live dictionary.
    pub fn dictionary(&self) -> &Q::Dictionary {
        &self.dictionary
    }

    /// The encoding policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Mutable access to the policy, to reconfigure it between batches.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Split into the dictionary and the policy.
    pub fn into_parts(self) -> (Q::Dictionary, P) {
        (self.dictionary, self.policy)
    }

    /// Move the state out, leaving an empty encoder in its place.
    pub fn take(&mut self) -> Self
    where
        P: Default,
    {
        core::mem::take(self)
    }
}

impl<Q: ?Sized + DictionaryToken, P: EncodingPolicy> StringEncoder<Q, P> {
    /// The number of distinct tokens seen so far.
    pub fn vocab_size(&self) -> usize {
        self.dictionary.size()
    }

    /// Tokenize a batch, growing the dictionary and feeding the policy.
    fn scan_batch<I, Tk>(
        &mut self,
        corpus: I,
        tokenizer: &Tk,
    ) -> P::Rows<'_>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        Tk: Tokenizer<Token = Q>,
    {
        self.policy.reset();

        let mut ids: Vec<TokenId> = Vec::new();
        for line in corpus {
            ids.clear();
            ids.extend(
                tokenizer
                    .tokens(line.as_ref())
                    .map(|token| self.dictionary.insert_or_get(token)),
            );
            log::trace!(
                "{} document {}: {} tokens",
                P::KIND,
                self.policy.num_documents(),
                ids.len()
            );
            self.policy.accumulate(&ids);
        }

        self.policy.finalize(self.dictionary.size())
    }

    /// Encode a batch into a zero-padded matrix.
    ///
    /// ## Arguments
    /// * `corpus` - the documents, one string each.
    /// * `tokenizer` - the tokenizer to split documents with.
    ///
    /// ## Returns
    /// A ``(documents, width)`` matrix; `width` is the longest row.
    /// An empty corpus yields a ``(0, 0)`` matrix.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn encode_matrix<I, Tk>(
        &mut self,
        corpus: I,
        tokenizer: &Tk,
    ) -> Array2<P::Value>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        Tk: Tokenizer<Token = Q>,
    {
        let matrix = {
            let rows = self.scan_batch(corpus, tokenizer);

            let mut matrix = Array2::zeros((rows.num_rows(), rows.max_row_len()));
            for (document, mut target) in matrix.rows_mut().into_iter().enumerate() {
                for (slot, value) in target.iter_mut().zip(rows.emit(document)) {
                    *slot = value;
                }
            }
            matrix
        };

        log::debug!(
            "{} batch: {:?} matrix, vocabulary size {}",
            P::KIND,
            matrix.shape(),
            self.vocab_size()
        );
        matrix
    }

    /// Encode a batch into unpadded per-document sequences.
    ///
    /// ## Arguments
    /// * `corpus` - the documents, one string each.
    /// * `tokenizer` - the tokenizer to split documents with.
    ///
    /// ## Returns
    /// One sequence per document.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn encode_ragged<I, Tk>(
        &mut self,
        corpus: I,
        tokenizer: &Tk,
    ) -> Vec<Vec<P::Value>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        Tk: Tokenizer<Token = Q>,
    {
        let output: Vec<Vec<P::Value>> = {
            let rows = self.scan_batch(corpus, tokenizer);
            (0..rows.num_rows())
                .map(|document| rows.emit(document))
                .collect()
        };

        log::debug!(
            "{} batch: {} ragged rows, vocabulary size {}",
            P::KIND,
            output.len(),
            self.vocab_size()
        );
        output
    }

    /// Encode a batch in the given [`OutputMode`].
    pub fn encode<I, Tk>(
        &mut self,
        corpus: I,
        tokenizer: &Tk,
        mode: OutputMode,
    ) -> EncodedOutput<P::Value>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        Tk: Tokenizer<Token = Q>,
    {
        match mode {
            OutputMode::Matrix => EncodedOutput::Matrix(self.encode_matrix(corpus, tokenizer)),
            OutputMode::Ragged => EncodedOutput::Ragged(self.encode_ragged(corpus, tokenizer)),
        }
    }

    /// Snapshot the persistent state.
    ///
    /// Captures every ``(token, id)`` pair in id order, and the policy
    /// configuration.
    pub fn to_state(&self) -> EncoderState<Q::Owned, P> {
        EncoderState {
            version: STATE_FORMAT_VERSION,
            policy_kind: P::KIND,
            policy: self.policy.clone(),
            tokens: self.dictionary.tokens().iter().cloned().zip(1..).collect(),
        }
    }

    /// Rebuild an encoder from a state snapshot.
    ///
    /// ## Returns
    /// The encoder; or an error if the snapshot has the wrong version or
    /// policy kind, or an inconsistent token list.
    pub fn try_from_state(state: EncoderState<Q::Owned, P>) -> WCResult<Self> {
        check_state_header::<P>(state.version, state.policy_kind)?;

        let dictionary = Q::Dictionary::try_from_pairs(state.tokens)?;
        Ok(Self::from_parts(dictionary, state.policy))
    }
}
