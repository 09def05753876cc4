//! String literals for Quill, from source text to string values.
//!
//! Runs the whole pipeline:
//!
//! ```text
//! raw source ──> LiteralScanner ──> raw body ──> normalize ──> decode_body ──> StringValue
//! ```
//!
//! Scanning and normalization live in `quill_lexer_core`; decoding and the
//! symbol table live in `quill_ir`. This crate joins them and maps codec
//! failures into [`LexError`]s.

use quill_ir::{decode_body, StringValue};
use quill_text::{RawChar, SourceCursor, TextScanner};

pub use quill_lexer_core::{
    encode_literal, minimal_delimiter_len, normalize, scan_all_literals, LexError,
    LexErrorContext, LexErrorKind, LexReplacement, LexSuggestion, LiteralForm, LiteralScanner,
    LiteralToken, EMPTY_STRING,
};

/// A decoded literal together with the token it came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Literal {
    pub token: LiteralToken,
    pub value: StringValue,
}

/// Scan one literal at the cursor and decode it.
///
/// # Errors
///
/// Any scanning error, or `InvalidScalar` when the normalized body holds a
/// surrogate or out-of-range value.
pub fn scan_literal<S>(cursor: &mut SourceCursor<S>) -> Result<StringValue, LexError>
where
    S: TextScanner<Item = RawChar>,
{
    let token = LiteralScanner::scan(cursor)?;
    decode_token(&token)
}

/// Like [`scan_literal`], but also accepts `()`, the empty string.
///
/// A `(` not followed by `)` is reported as `NotALiteral` at the character
/// after it; the `(` itself has been consumed.
pub fn scan_string<S>(cursor: &mut SourceCursor<S>) -> Result<StringValue, LexError>
where
    S: TextScanner<Item = RawChar>,
{
    if cursor.advance_if(|c| *c == RawChar::from('(')).is_none() {
        return scan_literal(cursor);
    }
    let after_paren = cursor.pos();
    match cursor.advance_if(|c| *c == RawChar::from(')')) {
        Some(_) => Ok(StringValue::default()),
        None => Err(LexError::not_a_literal(after_paren, cursor.peek().copied())),
    }
}

/// Normalize and decode a scanned token.
pub fn decode_token(token: &LiteralToken) -> Result<StringValue, LexError> {
    decode_body(&normalize(token)).map_err(|err| {
        let context = match token.form {
            LiteralForm::SingleLine => LexErrorContext::SingleLine {
                opening: token.span.start,
            },
            LiteralForm::MultiLine { column } => LexErrorContext::MultiLine {
                opening: token.span.start,
                column,
            },
        };
        LexError::invalid_scalar(token.span, err, context)
    })
}

/// Scan and decode every literal in `source`, in order.
#[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()))]
pub fn lex_literals(source: &str) -> Vec<Result<Literal, LexError>> {
    scan_all_literals(source)
        .into_iter()
        .map(|scanned| {
            let token = scanned?;
            let value = decode_token(&token)?;
            Ok(Literal { token, value })
        })
        .collect()
}

/// Spell a string value as a literal whose opening run sits at `column`.
pub fn encode_string(value: &StringValue, column: u32) -> String {
    encode_literal(&value.to_string(), column)
}
