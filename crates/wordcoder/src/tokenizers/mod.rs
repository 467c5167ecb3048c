//! # Tokenizers
//!
//! A [`Tokenizer`] is a stateless splitting rule. All per-line state
//! lives in a [`LineCursor`], created fresh for every input line;
//! [`Tokenizer::tokens`] wraps that in a [`LineTokens`] iterator.
//!
//! Two tokenizers are provided:
//! * [`SplitByAnyOf`] - maximal runs of non-delimiter characters,
//!   borrowed as `&str` slices of the line.
//! * [`CharExtract`] - one byte per token, from the `0..=255` alphabet.
//!
//! ## Example
//!
//! ```rust
//! use wordcoder::tokenizers::{SplitByAnyOf, Tokenizer};
//!
//! let tokenizer = SplitByAnyOf::new(" ,.");
//! let tokens: Vec<&str> = tokenizer.tokens("fast, and flexible.").collect();
//! assert_eq!(tokens, vec!["fast", "and", "flexible"]);
//! ```

mod char_extract;
mod line_cursor;
mod split_by_any_of;
mod tokenizer;

#[doc(inline)]
pub use char_extract::*;
#[doc(inline)]
pub use line_cursor::*;
#[doc(inline)]
pub use split_by_any_of::*;
#[doc(inline)]
pub use tokenizer::*;
