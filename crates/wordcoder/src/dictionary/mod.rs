//! # Token Dictionaries
//!
//! A dictionary is a growing ``{ token -> id }`` bijection.
//! Ids are assigned sequentially from `1` in first-seen order;
//! [`crate::types::UNKNOWN_ID`] (`0`) is never assigned.
//!
//! Every dictionary implements [`TokenDictionary`]; the storage strategy
//! is picked per token kind by [`DictionaryToken`]:
//! * [`HashDictionary`] - a hash map plus an ordered arena of owned tokens;
//!   used for string slices and general hashable values.
//! * [`ByteDictionary`] - a direct-indexed ``[TokenId; 256]`` table;
//!   used for single-byte tokens.
//!
//! Both strategies share the same observable behavior.

mod byte_dictionary;
mod dictionary_token;
mod hash_dictionary;
mod token_dictionary;

#[doc(inline)]
pub use byte_dictionary::*;
#[doc(inline)]
pub use dictionary_token::*;
#[doc(inline)]
pub use hash_dictionary::*;
#[doc(inline)]
pub use token_dictionary::*;
