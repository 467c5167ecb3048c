//! # Encoder State Snapshot

use serde::{Deserialize, Serialize};

use crate::{
    errors::{WCResult, WordcoderError},
    policies::{EncodingPolicy, PolicyKind},
    types::TokenId,
};

/// The current state format version.
pub const STATE_FORMAT_VERSION: u32 = 1;

/// Persistence format for encoder state.
///
/// Printed and parsed as kebab-case: `json`, `text`, `binary`.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StateFormat {
    /// `serde_json` document.
    #[default]
    Json,

    /// Line-oriented text with base64 token bytes.
    Text,

    /// `bincode` encoding.
    Binary,
}

/// Serializable snapshot of a [`crate::encoder::StringEncoder`].
///
/// Field order is part of the binary format: the ``(version, policy_kind)``
/// prefix is read and checked before the rest of the state.
///
/// ## Style Hints
/// Instance names should prefer `state`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderState<K, P> {
    /// The format version; see [`STATE_FORMAT_VERSION`].
    pub version: u32,

    /// The kind of the policy which wrote this state.
    pub policy_kind: PolicyKind,

    /// The policy configuration.
    pub policy: P,

    /// Every ``(token, id)`` pair, in id order.
    pub tokens: Vec<(K, TokenId)>,
}

/// Check a persisted ``(version, policy_kind)`` header against policy `P`.
///
/// ## Returns
/// * [`WordcoderError::Deserialization`] for an unsupported version;
/// * [`WordcoderError::UnknownPolicy`] for a different policy kind.
pub fn check_state_header<P: EncodingPolicy>(
    version: u32,
    policy_kind: PolicyKind,
) -> WCResult<()> {
    if version != STATE_FORMAT_VERSION {
        return Err(WordcoderError::Deserialization(format!(
            "unsupported state version {version}, expected {STATE_FORMAT_VERSION}"
        )));
    }
    if policy_kind != P::KIND {
        return Err(WordcoderError::UnknownPolicy {
            expected: P::KIND.to_string(),
            found: policy_kind.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;
    use crate::policies::{BagOfWordsPolicy, TfIdfPolicy};

    #[test]
    fn test_check_state_header() {
        assert!(check_state_header::<TfIdfPolicy>(STATE_FORMAT_VERSION, PolicyKind::TfIdf).is_ok());

        match check_state_header::<BagOfWordsPolicy>(STATE_FORMAT_VERSION, PolicyKind::TfIdf) {
            Err(WordcoderError::UnknownPolicy { expected, found }) => {
                assert_eq!(expected, "bag-of-words");
                assert_eq!(found, "tf-idf");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(matches!(
            check_state_header::<TfIdfPolicy>(0, PolicyKind::TfIdf),
            Err(WordcoderError::Deserialization(_))
        ));
    }

    #[test]
    fn test_state_format_names() {
        assert_eq!(StateFormat::default(), StateFormat::Json);
        assert_eq!(StateFormat::Binary.to_string(), "binary");
        assert_eq!(StateFormat::from_str("text").unwrap(), StateFormat::Text);
    }
}
