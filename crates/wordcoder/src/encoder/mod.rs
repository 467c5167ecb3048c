//! # String Encoders
//!
//! [`StringEncoder`] runs a corpus through a [`crate::tokenizers::Tokenizer`],
//! a dictionary, and an [`crate::policies::EncodingPolicy`].
//!
//! The dictionary persists across calls, so the vocabulary of one batch
//! extends the vocabulary of the previous ones; policy statistics
//! (TF-IDF document frequencies) cover one batch only.
//!
//! ## Example
//!
//! ```rust
//! use wordcoder::{
//!     dictionary::TokenDictionary,
//!     encoder::BagOfWordsEncoding,
//!     tokenizers::SplitByAnyOf,
//! };
//!
//! let corpus = ["hello how are you", "i am good", "Good how are you"];
//! let tokenizer = SplitByAnyOf::new(" ");
//!
//! let mut encoder: BagOfWordsEncoding<SplitByAnyOf> = Default::default();
//! let output = encoder.encode_matrix(&corpus, &tokenizer);
//!
//! assert_eq!(output.shape(), &[3, 8]);
//! assert_eq!(output.row(2).to_vec(), vec![0, 1, 1, 1, 0, 0, 0, 1]);
//! assert_eq!(encoder.dictionary().value("Good"), 8);
//! ```

mod encoded_output;
mod string_encoder;

#[doc(inline)]
pub use encoded_output::*;
#[doc(inline)]
pub use string_encoder::*;
