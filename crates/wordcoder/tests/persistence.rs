#![allow(missing_docs)]

use wordcoder::{
    WordcoderError,
    encoder::{BagOfWordsEncoding, DictionaryEncoding, StringEncoder, TfIdfEncoding},
    io::{StateFormat, load_encoder_path, read_encoder, save_encoder_path, write_encoder},
    policies::{BagOfWordsPolicy, EncodingPolicy, TfIdfPolicy, TfKind},
    tokenizers::{CharExtract, SplitByAnyOf, Tokenizer},
};

const FORMATS: [StateFormat; 3] = [StateFormat::Json, StateFormat::Text, StateFormat::Binary];

const CORPUS: &[&str] = &[
    "mlpack is an intuitive, fast, and flexible C++ machine learning library",
    "It is meant to be a machine learning analog to LAPACK",
    "In addition to its powerful C++ interface, mlpack also provides bindings",
];

/// Encode, round trip through every format, and re-encode.
///
/// Every restored encoder must reproduce the output from before the save, and the
/// restored encoders must agree with each other.
fn check_round_trip<Tk, P>(
    mut encoder: StringEncoder<Tk::Token, P>,
    tokenizer: &Tk,
) where
    Tk: Tokenizer,
    P: EncodingPolicy,
{
    let expected = encoder.encode_ragged(CORPUS, tokenizer);

    let restored: Vec<Vec<Vec<P::Value>>> = FORMATS
        .iter()
        .map(|&format| {
            let mut buf = Vec::new();
            write_encoder(&encoder, format, &mut buf).unwrap();

            let mut loaded: StringEncoder<Tk::Token, P> =
                read_encoder(format, buf.as_slice()).unwrap();
            assert_eq!(loaded.dictionary(), encoder.dictionary(), "{format}");
            loaded.encode_ragged(CORPUS, tokenizer)
        })
        .collect();

    for (format, output) in FORMATS.iter().zip(&restored) {
        assert_eq!(output, &expected, "{format} output differs");
    }
}

#[test]
fn round_trip_split_by_any_of() {
    let tokenizer = SplitByAnyOf::new(" .,\"");
    check_round_trip(DictionaryEncoding::<SplitByAnyOf>::default(), &tokenizer);
    check_round_trip(BagOfWordsEncoding::<SplitByAnyOf>::default(), &tokenizer);
    check_round_trip(
        StringEncoder::new(TfIdfPolicy::new(TfKind::SublinearTf, true)),
        &tokenizer,
    );
}

#[test]
fn round_trip_char_extract() {
    check_round_trip(DictionaryEncoding::<CharExtract>::default(), &CharExtract);
    check_round_trip(BagOfWordsEncoding::<CharExtract>::default(), &CharExtract);
    check_round_trip(TfIdfEncoding::<CharExtract>::default(), &CharExtract);
}

#[test]
fn restored_encoder_extends_vocabulary() {
    let tokenizer = SplitByAnyOf::whitespace();
    let mut encoder: DictionaryEncoding<SplitByAnyOf> = Default::default();
    encoder.encode_ragged(["a b", "c"], &tokenizer);

    let mut buf = Vec::new();
    write_encoder(&encoder, StateFormat::Binary, &mut buf).unwrap();
    let mut loaded: DictionaryEncoding<SplitByAnyOf> =
        read_encoder(StateFormat::Binary, buf.as_slice()).unwrap();

    assert_eq!(
        loaded.encode_ragged(["d c a"], &tokenizer),
        encoder.encode_ragged(["d c a"], &tokenizer),
    );
    assert_eq!(loaded.vocab_size(), 4);
}

#[test]
fn corrupt_state_is_rejected() {
    let tokenizer = SplitByAnyOf::whitespace();
    let mut encoder: BagOfWordsEncoding<SplitByAnyOf> = Default::default();
    encoder.encode_ragged(["x y z"], &tokenizer);

    let mut buf = Vec::new();
    write_encoder(&encoder, StateFormat::Text, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    // "x" = "eA==", "y" = "eQ==".
    assert!(text.contains("\neA== 1\neQ== 2\n"));
    let read = |text: String| {
        read_encoder::<str, BagOfWordsPolicy, _>(StateFormat::Text, text.as_bytes())
    };

    // Tokens may be renumbered, as long as ids stay in order.
    let swapped = text.replace("eA== 1\neQ== 2", "eQ== 1\neA== 2");
    assert!(read(swapped).is_ok());

    // Ids out of order.
    let reordered = text.replace("eA== 1\neQ== 2", "eQ== 2\neA== 1");
    assert!(matches!(
        read(reordered),
        Err(WordcoderError::Deserialization(_))
    ));

    // A repeated token.
    let duplicated = text.replace("eQ== 2", "eA== 2");
    assert!(matches!(
        read(duplicated),
        Err(WordcoderError::Deserialization(_))
    ));

    // A missing token line.
    let truncated = text.replace("eg== 3\n", "");
    assert!(matches!(read(truncated), Err(WordcoderError::Parse(_))));

    // Wrong policy.
    assert!(matches!(
        read_encoder::<str, TfIdfPolicy, _>(StateFormat::Text, text.as_bytes()),
        Err(WordcoderError::UnknownPolicy { .. })
    ));
}

#[test]
fn save_load_path() {
    let tokenizer = SplitByAnyOf::whitespace();
    let mut encoder: TfIdfEncoding<SplitByAnyOf> = Default::default();
    let expected = encoder.encode_matrix(["one two", "two three"], &tokenizer);

    tempdir::TempDir::new("wordcoder_persistence")
        .and_then(|dir| {
            for format in FORMATS {
                let path = dir.path().join(format!("encoder.{format}"));
                save_encoder_path(&encoder, format, &path).expect("Failed to save encoder");

                let mut loaded: TfIdfEncoding<SplitByAnyOf> =
                    load_encoder_path(format, &path).expect("Failed to load encoder");
                assert_eq!(
                    loaded.encode_matrix(["one two", "two three"], &tokenizer),
                    expected
                );
            }
            Ok(())
        })
        .unwrap();
}
