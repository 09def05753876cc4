//! Literal tokens.

use quill_text::{RawChar, SourceSpan};

/// Which of the two literal shapes was scanned.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LiteralForm {
    /// Body runs from the opening run to the closing run, newlines included.
    SingleLine,
    /// Opening run directly followed by a newline. `column` is the 0-based
    /// column of the opening run; body lines are aligned to it.
    MultiLine { column: u32 },
}

/// A scanned literal, before normalization and decoding.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LiteralToken {
    /// Length `N` of the opening (and closing) quote run.
    pub delimiter_len: u32,
    pub form: LiteralForm,
    /// Raw body, verbatim. For multi-line literals this starts with the
    /// newline after the opening run and ends with the newline before the
    /// closing line.
    pub body: Vec<RawChar>,
    /// From the first opening quote through the closing delimiter.
    pub span: SourceSpan,
}

impl LiteralToken {
    #[inline]
    pub fn is_multi_line(&self) -> bool {
        matches!(self.form, LiteralForm::MultiLine { .. })
    }

    /// Alignment column of a multi-line literal.
    #[inline]
    pub fn column(&self) -> Option<u32> {
        match self.form {
            LiteralForm::SingleLine => None,
            LiteralForm::MultiLine { column } => Some(column),
        }
    }

    /// The raw body as text. Unvalidated values print as `\u{XXXX}`.
    pub fn body_text(&self) -> String {
        self.body.iter().map(ToString::to_string).collect()
    }
}
