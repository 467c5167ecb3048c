//! # Tokenizer Trait

use core::fmt::Debug;

use crate::{dictionary::DictionaryToken, tokenizers::LineCursor};

/// A splitting rule turning one line of text into tokens.
///
/// Tokenizers are stateless; see [`LineCursor`].
pub trait Tokenizer {
    /// The kind of token produced.
    ///
    /// Tokens are borrowed from the line; the [`DictionaryToken`]
    /// bound picks the dictionary strategy that stores them.
    type Token: ?Sized + DictionaryToken + Debug + 'static;

    /// Produce the next token, advancing the cursor past it.
    ///
    /// ## Arguments
    /// * `cursor` - the per-line cursor.
    ///
    /// ## Returns
    /// The next token; or `None` once the line is exhausted.
    fn next_token<'a>(
        &self,
        cursor: &mut LineCursor<'a>,
    ) -> Option<&'a Self::Token>;

    /// Iterate over the tokens of one line.
    ///
    /// Every call starts from a fresh cursor.
    fn tokens<'t, 'a>(
        &'t self,
        line: &'a str,
    ) -> LineTokens<'t, 'a, Self>
    where
        Self: Sized,
    {
        LineTokens {
            tokenizer: self,
            cursor: LineCursor::new(line),
        }
    }
}

impl<T: Tokenizer> Tokenizer for &T {
    type Token = T::Token;

    fn next_token<'a>(
        &self,
        cursor: &mut LineCursor<'a>,
    ) -> Option<&'a Self::Token> {
        (*self).next_token(cursor)
    }
}

/// Iterator over the tokens of one line.
#[derive(Debug)]
pub struct LineTokens<'t, 'a, Tk> {
    tokenizer: &'t Tk,
    cursor: LineCursor<'a>,
}

impl<'t, 'a, Tk: Tokenizer> Iterator for LineTokens<'t, 'a, Tk> {
    type Item = &'a Tk::Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokenizer.next_token(&mut self.cursor)
    }
}
