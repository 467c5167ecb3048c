//! # JSON State Format

use std::io::{BufRead, Write};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    errors::WCResult,
    io::{EncoderState, check_state_header},
    policies::EncodingPolicy,
};

/// Write an [`EncoderState`] as a pretty-printed JSON document.
///
/// ## Arguments
/// * `state` - the state to write.
/// * `writer` - the writer to target.
pub fn write_json_state<K, P, W>(
    state: &EncoderState<K, P>,
    writer: &mut W,
) -> WCResult<()>
where
    K: Serialize,
    P: Serialize,
    W: Write,
{
    serde_json::to_writer_pretty(&mut *writer, state)?;
    writeln!(writer)?;
    Ok(())
}

/// Read an [`EncoderState`] from a JSON document.
///
/// The header is checked before the policy configuration is decoded,
/// so state written by another policy fails with
/// [`crate::errors::WordcoderError::UnknownPolicy`].
///
/// ## Arguments
/// * `reader` - the reader to consume.
pub fn read_json_state<K, P, R>(reader: R) -> WCResult<EncoderState<K, P>>
where
    K: DeserializeOwned,
    P: EncodingPolicy,
    R: BufRead,
{
    let state: EncoderState<K, serde_json::Value> = serde_json::from_reader(reader)?;
    check_state_header::<P>(state.version, state.policy_kind)?;

    Ok(EncoderState {
        version: state.version,
        policy_kind: state.policy_kind,
        policy: serde_json::from_value(state.policy)?,
        tokens: state.tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::WordcoderError,
        io::STATE_FORMAT_VERSION,
        policies::{DictionaryPolicy, PolicyKind, TfIdfPolicy, TfKind},
    };

    #[test]
    fn test_json_state() {
        let state = EncoderState {
            version: STATE_FORMAT_VERSION,
            policy_kind: PolicyKind::TfIdf,
            policy: TfIdfPolicy::new(TfKind::SublinearTf, true),
            tokens: vec![("hello".to_string(), 1), ("wörld".to_string(), 2)],
        };

        let mut buf = Vec::new();
        write_json_state(&state, &mut buf).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.contains("\"policy_kind\": \"tf-idf\""));
        assert!(text.contains("\"sublinear-tf\""));

        let loaded: EncoderState<String, TfIdfPolicy> = read_json_state(buf.as_slice()).unwrap();
        assert_eq!(loaded.tokens, state.tokens);
        assert_eq!(loaded.policy.tf_kind(), TfKind::SublinearTf);
        assert!(loaded.policy.smooth_idf());

        assert!(matches!(
            read_json_state::<String, DictionaryPolicy, _>(buf.as_slice()),
            Err(WordcoderError::UnknownPolicy { .. })
        ));
    }

    #[test]
    fn test_json_state_malformed() {
        assert!(matches!(
            read_json_state::<String, DictionaryPolicy, _>(b"{\"version\": 1".as_slice()),
            Err(WordcoderError::Json(_))
        ));
    }
}
