//! Delimiter-balanced literal scanning.
//!
//! # Design
//!
//! The opening run fixes the delimiter length `N`. What follows the run
//! selects the form:
//!
//! - newline: multi-line. The body is consumed a line at a time and each
//!   line is classified (blank, closing, misaligned, body).
//! - anything else: single-line. Quote runs are matched greedily; only a
//!   run of exactly `N` closes, any other run is content.
//!
//! Nothing is ever unescaped. Body characters pass through verbatim.

use quill_text::{raw_chars, RawChar, RawStrScanner, SourceCursor, SourcePos, TextScanner};

use crate::{LexError, LexErrorContext, LiteralForm, LiteralToken};

/// Scanner for one literal, starting at a quote.
pub struct LiteralScanner<'c, S> {
    cursor: &'c mut SourceCursor<S>,
    opening: SourcePos,
    delimiter_len: u32,
}

/// How a multi-line body line is treated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum LineKind {
    /// Only whitespace. Exempt from alignment.
    Blank,
    /// Exactly `C` indentation characters, exactly `N` quotes, then
    /// optional trailing whitespace.
    Closing,
    /// Content starting left of column `C`.
    Misaligned { found_column: u32 },
    Body,
}

impl<'c, S: TextScanner<Item = RawChar>> LiteralScanner<'c, S> {
    /// Scan one literal at the cursor.
    ///
    /// On success the cursor sits just past the closing delimiter (for the
    /// multi-line form, past the closing line's newline).
    ///
    /// # Errors
    ///
    /// - `NotALiteral` if the cursor is not at a quote; nothing is consumed.
    /// - `UnterminatedLiteral` if input ends first.
    /// - `MisalignedLine` for multi-line content left of the opening column.
    pub fn scan(cursor: &'c mut SourceCursor<S>) -> Result<LiteralToken, LexError> {
        let opening = cursor.pos();
        match cursor.peek() {
            Some(c) if c.is_quote() => {}
            found => return Err(LexError::not_a_literal(opening, found.copied())),
        }
        let run = cursor.eat_while(|c| c.is_quote());
        let delimiter_len = u32::try_from(run).unwrap_or(u32::MAX);

        let scanner = LiteralScanner {
            cursor,
            opening,
            delimiter_len,
        };
        if scanner.cursor.peek().is_some_and(|c| c.is_newline()) {
            scanner.multi_line()
        } else {
            scanner.single_line()
        }
    }

    fn single_line(self) -> Result<LiteralToken, LexError> {
        let n = self.delimiter_len as usize;
        let mut body = Vec::new();
        loop {
            match self.cursor.peek().copied() {
                None => {
                    return Err(self.unterminated(LexErrorContext::SingleLine {
                        opening: self.opening,
                    }))
                }
                Some(c) if c.is_quote() => {
                    let run = self.cursor.eat_while(|c| c.is_quote());
                    if run == n {
                        return Ok(self.finish(body, LiteralForm::SingleLine));
                    }
                    body.extend(std::iter::repeat(RawChar::QUOTE).take(run));
                }
                Some(_) => body.extend(self.cursor.advance()),
            }
        }
    }

    fn multi_line(self) -> Result<LiteralToken, LexError> {
        let column = self.opening.column;
        let context = LexErrorContext::MultiLine {
            opening: self.opening,
            column,
        };

        // The newline after the opening run starts the raw body.
        let mut body: Vec<RawChar> = self.cursor.advance().into_iter().collect();
        loop {
            if self.cursor.is_exhausted() {
                return Err(self.unterminated(context));
            }
            let line_start = self.cursor.pos();
            let (line, terminated) = self.cursor.take_line();
            match classify(&line, column, self.delimiter_len as usize) {
                LineKind::Closing => {
                    return Ok(self.finish(body, LiteralForm::MultiLine { column }));
                }
                LineKind::Misaligned { found_column } => {
                    tracing::trace!(line = line_start.line, found_column, "misaligned line");
                    return Err(LexError::misaligned_line(
                        line_start,
                        self.opening,
                        column,
                        found_column,
                    ));
                }
                LineKind::Blank | LineKind::Body => {
                    body.extend_from_slice(&line);
                    if !terminated {
                        return Err(self.unterminated(context));
                    }
                    body.push(RawChar::NEWLINE);
                }
            }
        }
    }

    fn finish(self, body: Vec<RawChar>, form: LiteralForm) -> LiteralToken {
        let span = self.cursor.span_from(self.opening);
        tracing::trace!(
            delimiter_len = self.delimiter_len,
            ?form,
            body_len = body.len(),
            %span,
            "scanned literal"
        );
        LiteralToken {
            delimiter_len: self.delimiter_len,
            form,
            body,
            span,
        }
    }

    #[cold]
    fn unterminated(&self, context: LexErrorContext) -> LexError {
        LexError::unterminated(
            self.cursor.span_from(self.opening),
            self.delimiter_len,
            context,
        )
    }
}

fn classify(line: &[RawChar], column: u32, delimiter_len: usize) -> LineKind {
    let indent = line.iter().take_while(|c| c.is_indent()).count();
    let rest = &line[indent..];
    if rest.iter().all(|c| c.is_blank()) {
        return LineKind::Blank;
    }
    let column = column as usize;
    if indent < column {
        return LineKind::Misaligned {
            found_column: u32::try_from(indent).unwrap_or(u32::MAX),
        };
    }
    if indent == column {
        let run = rest.iter().take_while(|c| c.is_quote()).count();
        if run == delimiter_len && rest[run..].iter().all(|c| c.is_blank()) {
            return LineKind::Closing;
        }
    }
    LineKind::Body
}

/// Scan every literal in `source`, skipping everything between them.
///
/// Returns tokens and errors in source order. After an error, scanning
/// resumes right after the failed literal's opening run.
#[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()))]
pub fn scan_all_literals(source: &str) -> Vec<Result<LiteralToken, LexError>> {
    let mut results = Vec::new();
    let mut cursor = SourceCursor::for_str(source);
    let mut anchor = Anchor::default();
    loop {
        cursor.eat_while(|c| !c.is_quote());
        if cursor.is_exhausted() {
            break;
        }
        let opening = cursor.pos();
        match LiteralScanner::scan(&mut cursor) {
            Ok(token) => results.push(Ok(token)),
            Err(err) => {
                tracing::debug!(%err, "literal failed, resuming after its opening run");
                results.push(Err(err));
                (cursor, anchor) = resume_after_run(source, anchor, opening);
            }
        }
    }
    tracing::debug!(count = results.len(), "scanned literals");
    results
}

/// A character offset in the source paired with its byte index.
#[derive(Copy, Clone, Debug, Default)]
struct Anchor {
    offset: u32,
    byte: usize,
}

/// Fresh cursor positioned just past the quote run that starts at `opening`.
///
/// Only the text between `anchor` and `opening` is walked, so resuming
/// after every failed literal stays linear in the source length.
fn resume_after_run(
    source: &str,
    anchor: Anchor,
    opening: SourcePos,
) -> (SourceCursor<RawStrScanner<'_>>, Anchor) {
    let skip = opening.offset.saturating_sub(anchor.offset) as usize;
    let byte = source[anchor.byte..]
        .char_indices()
        .nth(skip)
        .map_or(source.len(), |(i, _)| anchor.byte + i);
    let rest = &source[byte..];
    let run = rest.bytes().take_while(|&b| b == b'"').count();
    let run_u32 = u32::try_from(run).unwrap_or(u32::MAX);
    let pos = SourcePos::new(
        opening.offset.saturating_add(run_u32),
        opening.line,
        opening.column.saturating_add(run_u32),
    );
    let next = Anchor {
        offset: pos.offset,
        byte: byte + run,
    };
    (SourceCursor::with_position(raw_chars(&rest[run..]), pos), next)
}
