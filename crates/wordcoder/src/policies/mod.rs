//! # Encoding Policies
//!
//! A policy turns each document's id stream into an output row.
//!
//! Policies run as a small state machine, driven once per batch:
//! 1. [`EncodingPolicy::reset`] - clear the accumulators;
//! 2. [`EncodingPolicy::accumulate`] - once per document, in order;
//! 3. [`EncodingPolicy::finalize`] - fix the vocabulary size, and run any
//!    corpus-level computation (TF-IDF's idf);
//! 4. [`PolicyRows::emit`] - read rows out of the finalized view.
//!
//! Rows can only be read from the value returned by `finalize`,
//! which borrows the policy; so no row is emitted before the whole
//! batch has been scanned.
//!
//! Provided policies:
//! * [`DictionaryPolicy`] - the raw id sequence;
//! * [`BagOfWordsPolicy`] - per-id counts;
//! * [`TfIdfPolicy`] - term-frequency times inverse-document-frequency.

mod bag_of_words_policy;
mod dictionary_policy;
mod encoding_policy;
mod tf_idf_policy;

#[doc(inline)]
pub use bag_of_words_policy::*;
#[doc(inline)]
pub use dictionary_policy::*;
#[doc(inline)]
pub use encoding_policy::*;
#[doc(inline)]
pub use tf_idf_policy::*;
