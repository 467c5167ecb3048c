//! # Text State Format
//!
//! Lines are:
//! ```terminaloutput
//! wordcoder-state {VERSION}
//! policy {KIND}
//! option {NAME} {VALUE}
//! ...
//! tokens {COUNT}
//! {BASE64 TOKEN} {ID}
//! ...
//! ```
//!
//! Token lines are in id order; token bytes come from [`TokenBytes`].

use std::io::{BufRead, Write};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    dictionary::TokenBytes,
    errors::{WCResult, WordcoderError},
    io::{EncoderState, check_state_header},
    policies::{EncodingPolicy, PolicyKind},
    types::TokenId,
};

/// The magic word opening a text state stream.
pub const TEXT_STATE_MAGIC: &str = "wordcoder-state";

/// Write an [`EncoderState`] in the text format.
///
/// ## Arguments
/// * `state` - the state to write.
/// * `writer` - the writer to target.
pub fn write_text_state<K, P, W>(
    state: &EncoderState<K, P>,
    writer: &mut W,
) -> WCResult<()>
where
    K: TokenBytes,
    P: EncodingPolicy,
    W: Write,
{
    writeln!(writer, "{TEXT_STATE_MAGIC} {}", state.version)?;
    writeln!(writer, "policy {}", state.policy_kind)?;
    for (name, value) in state.policy.options() {
        writeln!(writer, "option {name} {value}")?;
    }

    writeln!(writer, "tokens {}", state.tokens.len())?;
    for (token, id) in &state.tokens {
        writeln!(
            writer,
            "{} {}",
            BASE64_STANDARD.encode(token.to_token_bytes()),
            id
        )?;
    }

    Ok(())
}

fn parse_error(message: impl Into<String>) -> WordcoderError {
    WordcoderError::Parse(message.into())
}

/// Split a `{KEY} {REST}` line, requiring the key.
fn keyed<'a>(
    line: &'a str,
    key: &str,
) -> WCResult<&'a str> {
    match line.split_once(' ') {
        Some((k, rest)) if k == key => Ok(rest),
        _ => Err(parse_error(format!("expected {key:?} line, found {line:?}"))),
    }
}

fn parse_id(s: &str) -> WCResult<TokenId> {
    s.parse()
        .map_err(|e: core::num::ParseIntError| parse_error(format!("bad id {s:?}: {e}")))
}

/// Read an [`EncoderState`] in the text format.
///
/// Parsing is strict: missing, reordered, or trailing lines are errors.
///
/// ## Arguments
/// * `reader` - the line reader.
pub fn read_text_state<K, P, R>(reader: R) -> WCResult<EncoderState<K, P>>
where
    K: TokenBytes,
    P: EncodingPolicy,
    R: BufRead,
{
    let mut lines = reader.lines();
    let mut next_line = || -> WCResult<String> {
        lines
            .next()
            .ok_or_else(|| parse_error("unexpected end of text state"))?
            .map_err(WordcoderError::from)
    };

    let header = next_line()?;
    let version: u32 = keyed(&header, TEXT_STATE_MAGIC)?
        .parse()
        .map_err(|e: core::num::ParseIntError| parse_error(format!("bad version: {e}")))?;

    let line = next_line()?;
    let kind = keyed(&line, "policy")?;
    let policy_kind: PolicyKind = kind
        .parse()
        .map_err(|_| parse_error(format!("unknown policy kind {kind:?}")))?;
    check_state_header::<P>(version, policy_kind)?;

    let mut policy = P::default();
    let count = loop {
        let line = next_line()?;
        if let Ok(option) = keyed(&line, "option") {
            let (name, value) = option
                .split_once(' ')
                .ok_or_else(|| parse_error(format!("option without value: {line:?}")))?;
            policy.set_option(name, value)?;
        } else {
            break parse_id(keyed(&line, "tokens")?)?;
        }
    };

    // The count is untrusted; short streams fail on the missing lines.
    let mut tokens: Vec<(K, TokenId)> = Vec::with_capacity(count.min(4096));
    for _ in 0..count {
        let line = next_line()?;
        let (encoded, id) = line
            .split_once(' ')
            .ok_or_else(|| parse_error(format!("expected token line, found {line:?}")))?;

        let bytes = BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| parse_error(e.to_string()))?;
        tokens.push((K::from_token_bytes(&bytes)?, parse_id(id)?));
    }

    for line in lines {
        if !line?.trim().is_empty() {
            return Err(parse_error("trailing content after token lines"));
        }
    }

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
        io::STATE_FORMAT_VERSION,
        policies::{DictionaryPolicy, TfIdfPolicy, TfKind},
    };

    #[test]
    fn test_text_state_layout() {
        let state = EncoderState {
            version: STATE_FORMAT_VERSION,
            policy_kind: PolicyKind::TfIdf,
            policy: TfIdfPolicy::new(TfKind::TermFrequency, false),
            tokens: vec![("hello".to_string(), 1), ("a b".to_string(), 2)],
        };

        let mut buf = Vec::new();
        write_text_state(&state, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf.clone()).unwrap(),
            "wordcoder-state 1\n\
             policy tf-idf\n\
             option tf-kind term-frequency\n\
             option smooth-idf false\n\
             tokens 2\n\
             aGVsbG8= 1\n\
             YSBi 2\n"
        );

        let loaded: EncoderState<String, TfIdfPolicy> = read_text_state(buf.as_slice()).unwrap();
        assert_eq!(loaded.tokens, state.tokens);
        assert_eq!(loaded.policy.tf_kind(), TfKind::TermFrequency);
    }

    #[test]
    fn test_text_state_errors() {
        let read = |text: &str| read_text_state::<String, TfIdfPolicy, _>(text.as_bytes());

        assert!(matches!(
            read("wordcoder-state 1\npolicy dictionary\ntokens 0\n"),
            Err(WordcoderError::UnknownPolicy { .. })
        ));
        assert!(matches!(
            read("wordcoder-state 1\npolicy tf-idf\noption bogus 1\ntokens 0\n"),
            Err(WordcoderError::Parse(_))
        ));
        assert!(matches!(
            read("wordcoder-state 1\npolicy tf-idf\ntokens 2\naGVsbG8= 1\n"),
            Err(WordcoderError::Parse(_))
        ));
        assert!(matches!(
            read("wordcoder-state 1\npolicy tf-idf\ntokens 1\n!!! 1\n"),
            Err(WordcoderError::Parse(_))
        ));
        assert!(matches!(
            read("wordcoder-state 1\npolicy tf-idf\ntokens 0\nextra\n"),
            Err(WordcoderError::Parse(_))
        ));
        assert!(matches!(
            read("wordcoder-state 9\npolicy tf-idf\ntokens 0\n"),
            Err(WordcoderError::Deserialization(_))
        ));
        assert!(matches!(read(""), Err(WordcoderError::Parse(_))));
        assert!(matches!(
            read("wordcoder-state 1\npolicy tf-idf\ntokens 18446744073709551615\n"),
            Err(WordcoderError::Parse(_))
        ));
        assert!(matches!(
            read("wordcoder-state 1\npolicy tf-idf\ntokens 99999999999999999999\n"),
            Err(WordcoderError::Parse(_))
        ));
    }

    #[test]
    fn test_text_state_byte_tokens() {
        let state = EncoderState {
            version: STATE_FORMAT_VERSION,
            policy_kind: PolicyKind::Dictionary,
            policy: DictionaryPolicy::default(),
            tokens: vec![(b' ', 1), (0xFFu8, 2)],
        };

        let mut buf = Vec::new();
        write_text_state(&state, &mut buf).unwrap();

        let loaded: EncoderState<u8, DictionaryPolicy> = read_text_state(buf.as_slice()).unwrap();
        assert_eq!(loaded.tokens, state.tokens);
    }
}
