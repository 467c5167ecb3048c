//! # `wordcoder` String Encoding
//!
//! Turns batches of text into numeric rows, for feeding text into
//! numerical learning algorithms.
//!
//! The pipeline is:
//! ```text
//! line -> [tokenizers::Tokenizer] -> tokens -> [dictionary] -> ids -> [policies] -> rows
//! ```
//!
//! See:
//! * [`tokenizers`] to split lines into tokens.
//! * [`dictionary`] for the persistent ``{ token -> id }`` mapping.
//! * [`policies`] for the Dictionary, Bag-of-Words, and TF-IDF encodings.
//! * [`encoder`] to drive the pipeline and assemble matrix or ragged output.
//! * [`io`] to save and restore encoder state.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps all ``HashMap``/``HashSet`` implementations for ``ahash``.
//!
//! This is done by the ``types::WC{HashMap,HashSet}`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! This swaps all ``HashMap``/``HashSet`` implementations for ``foldhash``;
//! "ahash" wins if both are enabled.
//!
//! #### feature: ``tracing``
//!
//! This enables ``tracing`` instrumentation of the encode entry points.
//!
//! ## Logging
//!
//! Batch summaries are logged through the ``log`` facade at ``debug``;
//! per-document token counts at ``trace``; state save / load at ``info``.
//!
//! ## Example
//!
//! ```rust
//! use wordcoder::{
//!     encoder::TfIdfEncoding,
//!     tokenizers::CharExtract,
//! };
//!
//! let mut encoder: TfIdfEncoding<CharExtract> = Default::default();
//! let rows = encoder.encode_ragged(["GACCA", "ABCABCD", "GAB"], &CharExtract);
//!
//! // 'D' (id 5) occurs once, in one of three documents.
//! let expected = 1.0 + (3.0f64).ln();
//! assert!((rows[1][4] - expected).abs() < 1e-12);
//! assert_eq!(rows[0][4], 0.0);
//! ```
#![warn(missing_docs, unused)]

pub mod dictionary;
pub mod encoder;
pub mod errors;
pub mod io;
pub mod policies;
pub mod tokenizers;
pub mod types;

#[doc(inline)]
pub use errors::{WCResult, WordcoderError};
#[doc(inline)]
pub use types::{TokenId, UNKNOWN_ID};
