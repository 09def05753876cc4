//! Position-tracking cursor over a raw character scanner.
//!
//! The literal scanner needs the column at which a delimiter run starts and
//! the line/column of every error. [`SourceCursor`] wraps any scanner of
//! [`RawChar`] values and keeps that bookkeeping in one place, so the
//! underlying source (string, file, socket) stays interchangeable.

use std::fmt;

use crate::{raw_chars, RawChar, RawStrScanner, TextScanner};

/// A position in source text.
///
/// Layout: 12 bytes
/// - offset: characters consumed since the start of the source
/// - line: 1-based line number
/// - column: 0-based column, counted in characters
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SourcePos {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    /// Position of the first character of a source.
    pub const START: SourcePos = SourcePos {
        offset: 0,
        line: 1,
        column: 0,
    };

    #[inline]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        SourcePos {
            offset,
            line,
            column,
        }
    }

    /// Position after consuming `c` from this position.
    #[inline]
    #[must_use]
    pub fn advanced_by(self, c: RawChar) -> SourcePos {
        let offset = self.offset.saturating_add(1);
        if c.is_newline() {
            SourcePos {
                offset,
                line: self.line.saturating_add(1),
                column: 0,
            }
        } else {
            SourcePos {
                offset,
                line: self.line,
                column: self.column.saturating_add(1),
            }
        }
    }
}

impl Default for SourcePos {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourcePos {
    /// Renders as `line:column` with a 1-based column, the form editors expect.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}

/// Half-open range between two source positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourceSpan {
    pub start: SourcePos,
    pub end: SourcePos,
}

impl SourceSpan {
    #[inline]
    pub const fn new(start: SourcePos, end: SourcePos) -> Self {
        SourceSpan { start, end }
    }

    /// Zero-length span at `pos`.
    #[inline]
    pub const fn point(pos: SourcePos) -> Self {
        SourceSpan {
            start: pos,
            end: pos,
        }
    }

    /// Length in characters.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.offset - self.start.offset
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Scanner wrapper that tracks the [`SourcePos`] of the next character.
#[derive(Clone, Debug)]
pub struct SourceCursor<S> {
    scanner: S,
    pos: SourcePos,
}

impl<'a> SourceCursor<RawStrScanner<'a>> {
    /// Cursor over a string, starting at [`SourcePos::START`].
    pub fn for_str(source: &'a str) -> Self {
        SourceCursor::new(raw_chars(source))
    }
}

impl<S: TextScanner<Item = RawChar>> SourceCursor<S> {
    pub fn new(scanner: S) -> Self {
        Self::with_position(scanner, SourcePos::START)
    }

    /// Cursor whose first character sits at `pos`.
    ///
    /// Used when scanning resumes mid-line, for example on the remainder
    /// of a source after a reader has consumed a prefix.
    pub fn with_position(scanner: S, pos: SourcePos) -> Self {
        Self { scanner, pos }
    }

    /// Position of the next character (or of end of input).
    #[inline]
    pub fn pos(&self) -> SourcePos {
        self.pos
    }

    /// Span from `start` to the current position.
    #[inline]
    pub fn span_from(&self, start: SourcePos) -> SourceSpan {
        SourceSpan::new(start, self.pos)
    }

    /// Consume characters up to and including the next newline.
    ///
    /// Returns the characters before the newline, and whether a newline was
    /// found (`false` means the line ended at end of input).
    pub fn take_line(&mut self) -> (Vec<RawChar>, bool) {
        let mut line = Vec::new();
        while let Some(c) = self.advance() {
            if c.is_newline() {
                return (line, true);
            }
            line.push(c);
        }
        (line, false)
    }

    pub fn into_inner(self) -> S {
        self.scanner
    }
}

impl<S: TextScanner<Item = RawChar>> TextScanner for SourceCursor<S> {
    type Item = RawChar;

    #[inline]
    fn peek(&mut self) -> Option<&RawChar> {
        self.scanner.peek()
    }

    #[inline]
    fn advance(&mut self) -> Option<RawChar> {
        let c = self.scanner.advance()?;
        self.pos = self.pos.advanced_by(c);
        Some(c)
    }
}
