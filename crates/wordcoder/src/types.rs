//! # Common Types

/// Integer id assigned to a token by a dictionary.
///
/// Ids are dense and 1-based; see [`UNKNOWN_ID`].
pub type TokenId = usize;

/// The reserved id.
///
/// Means "unknown" on lookup and "padding" in matrix output;
/// it is never assigned to a real token.
pub const UNKNOWN_ID: TokenId = 0;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> WCHashMap<K, V> {
            WCHashMap::new()
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type WCHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> WCHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type WCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> WCHashMap<K, V> {
            WCHashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_aliases() {
        let mut map: WCHashMap<&str, TokenId> = hash_map_new();
        map.insert("a", 1);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b").copied().unwrap_or(UNKNOWN_ID), UNKNOWN_ID);
    }
}
