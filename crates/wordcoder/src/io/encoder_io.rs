//! # Encoder Save / Load

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    dictionary::DictionaryToken,
    encoder::StringEncoder,
    errors::WCResult,
    io::{
        EncoderState,
        StateFormat,
        read_binary_state,
        read_json_state,
        read_text_state,
        write_binary_state,
        write_json_state,
        write_text_state,
    },
    policies::EncodingPolicy,
};

/// Write an encoder's state to a [`Write`] writer.
///
/// ## Arguments
/// * `encoder` - the encoder to save.
/// * `format` - the state format.
/// * `writer` - the writer to target.
pub fn write_encoder<Q, P, W>(
    encoder: &StringEncoder<Q, P>,
    format: StateFormat,
    writer: &mut W,
) -> WCResult<()>
where
    Q: ?Sized + DictionaryToken,
    P: EncodingPolicy,
    W: Write,
{
    let state = encoder.to_state();
    match format {
        StateFormat::Json => write_json_state(&state, writer),
        StateFormat::Text => write_text_state(&state, writer),
        StateFormat::Binary => write_binary_state(&state, writer),
    }
}

/// Read an encoder from a state reader.
///
/// ## Arguments
/// * `format` - the state format.
/// * `reader` - the reader to consume.
///
/// ## Returns
/// The restored encoder; or an error, leaving nothing partially restored.
///
/// ## Errors
/// Malformed state surfaces as any of four variants, depending on where it is caught:
/// * [`WordcoderError::Deserialization`] - unsupported version, an out-of-range or
///   duplicate id, or a duplicate token.
/// * [`WordcoderError::Parse`] - a text state that does not follow the line grammar.
/// * [`WordcoderError::Json`] - a JSON state that does not decode.
/// * [`WordcoderError::Binary`] - a binary state that does not decode.
///
/// A well-formed state written by a different policy yields
/// [`WordcoderError::UnknownPolicy`]; reader failures yield [`WordcoderError::Io`].
///
/// [`WordcoderError::Deserialization`]: crate::errors::WordcoderError::Deserialization
/// [`WordcoderError::Parse`]: crate::errors::WordcoderError::Parse
/// [`WordcoderError::Json`]: crate::errors::WordcoderError::Json
/// [`WordcoderError::Binary`]: crate::errors::WordcoderError::Binary
/// [`WordcoderError::UnknownPolicy`]: crate::errors::WordcoderError::UnknownPolicy
/// [`WordcoderError::Io`]: crate::errors::WordcoderError::Io
pub fn read_encoder<Q, P, R>(
    format: StateFormat,
    reader: R,
) -> WCResult<StringEncoder<Q, P>>
where
    Q: ?Sized + DictionaryToken,
    P: EncodingPolicy,
    R: BufRead,
{
    let state: EncoderState<Q::Owned, P> = match format {
        StateFormat::Json => read_json_state(reader)?,
        StateFormat::Text => read_text_state(reader)?,
        StateFormat::Binary => read_binary_state(reader)?,
    };
    StringEncoder::try_from_state(state)
}

/// Save an encoder's state to a file.
///
/// ## Arguments
/// * `encoder` - the encoder to save.
/// * `format` - the state format.
/// * `path` - the path to write.
pub fn save_encoder_path<Q, P, F>(
    encoder: &StringEncoder<Q, P>,
    format: StateFormat,
    path: F,
) -> WCResult<()>
where
    Q: ?Sized + DictionaryToken,
    P: EncodingPolicy,
    F: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_encoder(encoder, format, &mut writer)?;
    writer.flush()?;

    log::info!(
        "saved {} encoder ({} tokens) to {} as {format}",
        P::KIND,
        encoder.vocab_size(),
        path.display()
    );
    Ok(())
}

/// Load an encoder from a state file.
///
/// ## Arguments
/// * `format` - the state format.
/// * `path` - the path to read.
///
/// ## Errors
/// [`WordcoderError::Io`] when the file cannot be opened; otherwise as [`read_encoder`].
///
/// [`WordcoderError::Io`]: crate::errors::WordcoderError::Io
pub fn load_encoder_path<Q, P, F>(
    format: StateFormat,
    path: F,
) -> WCResult<StringEncoder<Q, P>>
where
    Q: ?Sized + DictionaryToken,
    P: EncodingPolicy,
    F: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let encoder: StringEncoder<Q, P> = read_encoder(format, reader)?;

    log::info!(
        "loaded {} encoder ({} tokens) from {} as {format}",
        P::KIND,
        encoder.vocab_size(),
        path.display()
    );
    Ok(encoder)
}
