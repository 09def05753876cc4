//! Literal scanning errors.
//!
//! Errors follow the WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` describing which literal form was being scanned
//! - HOW: `suggestions` providing actionable fixes

use quill_ir::CodecError;
use quill_text::{RawChar, SourcePos, SourceSpan};
use thiserror::Error;

/// A literal scanning error with full context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{}: {kind}", .span.start)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: SourceSpan,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were checking.
    pub context: LexErrorContext,
    /// HOW to fix.
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// The current character is not a quote.
    #[error("expected a string literal, found {}", describe(.found))]
    NotALiteral { found: Option<RawChar> },

    /// Input ended before a closing run of exactly `delimiter_len` quotes.
    #[error(
        "unterminated string literal opened at {opening}: no closing run of {delimiter_len} quote(s)"
    )]
    UnterminatedLiteral {
        opening: SourcePos,
        delimiter_len: u32,
    },

    /// A multi-line body line with content left of the literal's column.
    #[error(
        "line {} of a multi-line literal is indented by {found_column}, but the literal needs {required_column}",
        .line_start.line
    )]
    MisalignedLine {
        line_start: SourcePos,
        required_column: u32,
        found_column: u32,
    },

    /// The normalized body holds a value that is not a Unicode scalar.
    #[error("invalid character in literal body: {0}")]
    InvalidScalar(CodecError),
}

fn describe(found: &Option<RawChar>) -> String {
    found.map_or_else(|| "end of input".to_owned(), |c| format!("{c:?}"))
}

/// Scanning context at the point of error: the WHY.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Looking for the start of a literal.
    #[default]
    TopLevel,
    /// Inside a single-line literal.
    SingleLine { opening: SourcePos },
    /// Inside a multi-line literal aligned to `column`.
    MultiLine { opening: SourcePos, column: u32 },
}

/// Suggestion for fixing a scanning error: the HOW.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// Concrete text replacement for auto-fix, if applicable.
    pub replacement: Option<LexReplacement>,
    /// Priority (lower = more likely relevant). 0 = most likely.
    pub priority: u8,
}

/// A concrete text replacement for an auto-fix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    pub span: SourceSpan,
    pub text: String,
}

impl LexSuggestion {
    /// Create a text-only suggestion (no code replacement).
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            priority,
        }
    }

    /// Create a suggestion with a replacement.
    pub fn replace(message: impl Into<String>, span: SourceSpan, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
            }),
            priority: 0,
        }
    }
}

impl LexError {
    /// Create a not-a-literal error at `pos`.
    #[cold]
    pub fn not_a_literal(pos: SourcePos, found: Option<RawChar>) -> Self {
        Self {
            span: SourceSpan::point(pos),
            kind: LexErrorKind::NotALiteral { found },
            context: LexErrorContext::TopLevel,
            suggestions: Vec::new(),
        }
    }

    /// Create an unterminated literal error covering everything scanned.
    #[cold]
    pub fn unterminated(span: SourceSpan, delimiter_len: u32, context: LexErrorContext) -> Self {
        let quotes = "\"".repeat(delimiter_len as usize);
        let suggestion = match context {
            LexErrorContext::MultiLine { column, .. } => LexSuggestion::text(
                format!("end the literal with a line holding only `{quotes}` at column {column}"),
                0,
            ),
            LexErrorContext::SingleLine { .. } | LexErrorContext::TopLevel => {
                LexSuggestion::text(format!("close the literal with `{quotes}`"), 0)
            }
        };
        Self {
            span,
            kind: LexErrorKind::UnterminatedLiteral {
                opening: span.start,
                delimiter_len,
            },
            context,
            suggestions: vec![
                suggestion,
                LexSuggestion::text(
                    "if the content contains this many quotes in a row, use a longer delimiter",
                    1,
                ),
            ],
        }
    }

    /// Create a misaligned line error.
    ///
    /// The span covers the line's indentation; the suggested replacement
    /// re-indents it to the literal's column.
    #[cold]
    pub fn misaligned_line(
        line_start: SourcePos,
        opening: SourcePos,
        required_column: u32,
        found_column: u32,
    ) -> Self {
        let indent_end = SourcePos::new(
            line_start.offset.saturating_add(found_column),
            line_start.line,
            found_column,
        );
        let span = SourceSpan::new(line_start, indent_end);
        Self {
            span,
            kind: LexErrorKind::MisalignedLine {
                line_start,
                required_column,
                found_column,
            },
            context: LexErrorContext::MultiLine {
                opening,
                column: required_column,
            },
            suggestions: vec![LexSuggestion::replace(
                format!("indent the line to column {required_column}"),
                span,
                " ".repeat(required_column as usize),
            )],
        }
    }

    /// Create an invalid scalar error for a decoded literal.
    #[cold]
    pub fn invalid_scalar(span: SourceSpan, error: CodecError, context: LexErrorContext) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidScalar(error),
            context,
            suggestions: Vec::new(),
        }
    }

    /// Whether scanning can continue at the same position with other rules.
    ///
    /// Only [`LexErrorKind::NotALiteral`] consumes nothing; every other error
    /// has already consumed part of a literal.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind, LexErrorKind::NotALiteral { .. })
    }
}
