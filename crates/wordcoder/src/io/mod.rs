//! # Encoder State IO
//!
//! An encoder's persistent state is its dictionary (every ``(token, id)``
//! pair, in id order) and its policy configuration; see [`EncoderState`].
//! Batch accumulators are never written.
//!
//! Three interchangeable formats are supported, selected by [`StateFormat`]:
//! * [`StateFormat::Json`] - self-describing `serde_json` document;
//! * [`StateFormat::Text`] - line-oriented, with base64 token bytes;
//! * [`StateFormat::Binary`] - compact `bincode` encoding.
//!
//! Reading is all-or-nothing: a malformed or inconsistent stream yields an
//! error, never a partially restored encoder.
//!
//! ## Example
//!
//! ```rust
//! use wordcoder::{
//!     encoder::DictionaryEncoding,
//!     io::{StateFormat, read_encoder, write_encoder},
//!     tokenizers::SplitByAnyOf,
//! };
//!
//! let tokenizer = SplitByAnyOf::new(" ");
//! let mut encoder: DictionaryEncoding<SplitByAnyOf> = Default::default();
//! encoder.encode_ragged(["a b c", "c b"], &tokenizer);
//!
//! let mut buf = Vec::new();
//! write_encoder(&encoder, StateFormat::Text, &mut buf).unwrap();
//!
//! let mut restored: DictionaryEncoding<SplitByAnyOf> =
//!     read_encoder(StateFormat::Text, buf.as_slice()).unwrap();
//! assert_eq!(
//!     restored.encode_ragged(["b a d"], &tokenizer),
//!     vec![vec![2, 1, 4]],
//! );
//! ```

mod binary_state;
mod encoder_io;
mod encoder_state;
mod json_state;
mod text_state;

#[doc(inline)]
pub use binary_state::*;
#[doc(inline)]
pub use encoder_io::*;
#[doc(inline)]
pub use encoder_state::*;
#[doc(inline)]
pub use json_state::*;
#[doc(inline)]
pub use text_state::*;
