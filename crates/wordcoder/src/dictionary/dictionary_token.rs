//! # Token Kinds

use core::{borrow::Borrow, fmt::Debug, hash::Hash};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    dictionary::{ByteDictionary, HashDictionary, TokenDictionary},
    errors::{WCResult, WordcoderError},
};

/// A token kind, and the dictionary strategy which stores it.
///
/// Implemented for the borrowed form a tokenizer yields:
/// * `str` and `[u8]` - slices of a line, owned as `String` / `Vec<u8>`;
/// * `u8` - the bounded byte alphabet, stored in a [`ByteDictionary`];
/// * `char`, `String`, `Vec<u8>`, and the integer types - stored as themselves.
pub trait DictionaryToken {
    /// The canonical owned copy kept by the dictionary.
    type Owned: Borrow<Self>
        + Clone
        + Debug
        + Eq
        + Hash
        + Send
        + Sync
        + TokenBytes
        + Serialize
        + DeserializeOwned
        + 'static;

    /// The dictionary strategy for this token kind.
    type Dictionary: TokenDictionary<Self, Owned = Self::Owned>;
}

impl DictionaryToken for str {
    type Owned = String;
    type Dictionary = HashDictionary<String>;
}

impl DictionaryToken for [u8] {
    type Owned = Vec<u8>;
    type Dictionary = HashDictionary<Vec<u8>>;
}

impl DictionaryToken for u8 {
    type Owned = u8;
    type Dictionary = ByteDictionary;
}

macro_rules! hashed_dictionary_token {
    ($($t:ty),* $(,)?) => {
        $(
            impl DictionaryToken for $t {
                type Owned = $t;
                type Dictionary = HashDictionary<$t>;
            }
        )*
    };
}

hashed_dictionary_token!(
    String, Vec<u8>, char, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

/// Conversion of owned tokens to and from raw bytes.
///
/// Used by the line-oriented text state format.
pub trait TokenBytes: Sized {
    /// The raw byte form of the token.
    fn to_token_bytes(&self) -> Vec<u8>;

    /// Rebuild a token from its raw byte form.
    fn from_token_bytes(bytes: &[u8]) -> WCResult<Self>;
}

impl TokenBytes for String {
    fn to_token_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn from_token_bytes(bytes: &[u8]) -> WCResult<Self> {
        String::from_utf8(bytes.to_vec()).map_err(|e| WordcoderError::Parse(e.to_string()))
    }
}

impl TokenBytes for Vec<u8> {
    fn to_token_bytes(&self) -> Vec<u8> {
        self.clone()
    }

    fn from_token_bytes(bytes: &[u8]) -> WCResult<Self> {
        Ok(bytes.to_vec())
    }
}

impl TokenBytes for char {
    fn to_token_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    fn from_token_bytes(bytes: &[u8]) -> WCResult<Self> {
        let s = core::str::from_utf8(bytes).map_err(|e| WordcoderError::Parse(e.to_string()))?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(WordcoderError::Parse(format!(
                "expected exactly one char, found {s:?}"
            ))),
        }
    }
}

macro_rules! int_token_bytes {
    ($($t:ty),* $(,)?) => {
        $(
            impl TokenBytes for $t {
                fn to_token_bytes(&self) -> Vec<u8> {
                    self.to_be_bytes().to_vec()
                }

                fn from_token_bytes(bytes: &[u8]) -> WCResult<Self> {
                    let raw = bytes.try_into().map_err(|_| {
                        WordcoderError::Parse(format!(
                            "expected {} bytes for {}, found {}",
                            core::mem::size_of::<$t>(),
                            stringify!($t),
                            bytes.len()
                        ))
                    })?;
                    Ok(<$t>::from_be_bytes(raw))
                }
            }
        )*
    };
}

int_token_bytes!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
