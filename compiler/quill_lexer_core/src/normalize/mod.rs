//! Multi-line indentation normalization.
//!
//! Turns the raw body of a multi-line literal into its content:
//!
//! 1. strip the literal's column `C` of indentation from every line
//!    (whitespace-only lines lose up to `C` characters of any blank kind),
//! 2. drop the newline that follows the opening run,
//! 3. drop the newline that precedes the closing line.
//!
//! Steps 2 and 3 remove at most one character each and never touch newlines
//! between content lines. Single-line bodies are returned unchanged.

use quill_text::RawChar;

use crate::{LiteralForm, LiteralToken};

/// Content of a scanned literal, as raw characters.
pub fn normalize(token: &LiteralToken) -> Vec<RawChar> {
    let LiteralForm::MultiLine { column } = token.form else {
        return token.body.clone();
    };
    let column = column as usize;

    let mut content = Vec::with_capacity(token.body.len());
    for (i, line) in token.body.split(|c| c.is_newline()).enumerate() {
        if i > 0 {
            content.push(RawChar::NEWLINE);
        }
        content.extend_from_slice(&line[prefix_len(line, column)..]);
    }

    if content.first().is_some_and(|c| c.is_newline()) {
        content.remove(0);
    }
    if content.last().is_some_and(|c| c.is_newline()) {
        content.pop();
    }
    content
}

/// Characters of `line` that belong to the alignment prefix.
fn prefix_len(line: &[RawChar], column: usize) -> usize {
    if line.iter().all(|c| c.is_blank()) {
        line.len().min(column)
    } else {
        line.iter().take(column).take_while(|c| c.is_indent()).count()
    }
}
