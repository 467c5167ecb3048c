//! # Binary State Format

use std::io::{Read, Write};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    errors::WCResult,
    io::{EncoderState, check_state_header},
    policies::{EncodingPolicy, PolicyKind},
    types::TokenId,
};

/// Write an [`EncoderState`] in the `bincode` format.
///
/// ## Arguments
/// * `state` - the state to write.
/// * `writer` - the writer to target.
pub fn write_binary_state<K, P, W>(
    state: &EncoderState<K, P>,
    writer: &mut W,
) -> WCResult<()>
where
    K: Serialize,
    P: Serialize,
    W: Write,
{
    bincode::serialize_into(writer, state)?;
    Ok(())
}

/// Read an [`EncoderState`] in the `bincode` format.
///
/// `bincode` lays struct fields out back to back; the ``(version, policy_kind)``
/// prefix is decoded and checked first, then the remainder.
///
/// ## Arguments
/// * `reader` - the reader to consume.
pub fn read_binary_state<K, P, R>(mut reader: R) -> WCResult<EncoderState<K, P>>
where
    K: DeserializeOwned,
    P: EncodingPolicy,
    R: Read,
{
    let (version, policy_kind): (u32, PolicyKind) = bincode::deserialize_from(&mut reader)?;
    check_state_header::<P>(version, policy_kind)?;

    let (policy, tokens): (P, Vec<(K, TokenId)>) = bincode::deserialize_from(&mut reader)?;
    Ok(EncoderState {
        version,
        policy_kind,
        policy,
        tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::WordcoderError,
        io::STATE_FORMAT_VERSION,
        policies::{BagOfWordsPolicy, TfIdfPolicy, TfKind},
    };

    fn sample_state() -> EncoderState<u8, TfIdfPolicy> {
        EncoderState {
            version: STATE_FORMAT_VERSION,
            policy_kind: PolicyKind::TfIdf,
            policy: TfIdfPolicy::default().with_tf_kind(TfKind::Binary),
            tokens: vec![(b'G', 1), (b'A', 2), (b'C', 3)],
        }
    }

    #[test]
    fn test_binary_state() {
        let state = sample_state();

        let mut buf = Vec::new();
        write_binary_state(&state, &mut buf).unwrap();

        let loaded: EncoderState<u8, TfIdfPolicy> = read_binary_state(buf.as_slice()).unwrap();
        assert_eq!(loaded.tokens, state.tokens);
        assert_eq!(loaded.policy.tf_kind(), TfKind::Binary);

        assert!(matches!(
            read_binary_state::<u8, BagOfWordsPolicy, _>(buf.as_slice()),
            Err(WordcoderError::UnknownPolicy { .. })
        ));
    }

    #[test]
    fn test_binary_state_truncated() {
        let mut buf = Vec::new();
        write_binary_state(&sample_state(), &mut buf).unwrap();
        buf.truncate(buf.len() - 3);

        assert!(matches!(
            read_binary_state::<u8, TfIdfPolicy, _>(buf.as_slice()),
            Err(WordcoderError::Binary(_))
        ));
    }
}
