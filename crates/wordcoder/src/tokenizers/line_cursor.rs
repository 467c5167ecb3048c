//! # Line Cursor

/// A cursor over the unconsumed remainder of one input line.
///
/// Cursors are never shared across lines, or across tokenizers;
/// each tokenizer only advances to positions it can resume from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCursor<'a> {
    line: &'a str,
    offset: usize,
}

impl<'a> LineCursor<'a> {
    /// Start a cursor at the beginning of `line`.
    pub fn new(line: &'a str) -> Self {
        Self { line, offset: 0 }
    }

    /// The unconsumed text.
    ///
    /// Empty if the cursor sits inside a multi-byte character,
    /// which only byte-level tokenizers can cause.
    pub fn remaining(&self) -> &'a str {
        self.line.get(self.offset..).unwrap_or_default()
    }

    /// The unconsumed bytes.
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.line.as_bytes()[self.offset..]
    }

    /// Move the cursor forward `len` bytes, stopping at the end of the line.
    pub fn advance(
        &mut self,
        len: usize,
    ) {
        self.offset = (self.offset + len).min(self.line.len());
    }

    /// Has the whole line been consumed?
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.line.len()
    }
}
