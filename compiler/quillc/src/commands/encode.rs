//! `quill encode`: spell text from stdin as a literal.

use std::io::{self, Read, Write};

use serde::Serialize;

use quill_lexer::{encode_literal, EMPTY_STRING};

use crate::options::CliOptions;

#[derive(Serialize)]
struct EncodeReport<'a> {
    column: u32,
    /// Zero for the empty string, which is spelled without quotes.
    delimiter_len: usize,
    literal: &'a str,
}

/// Encode everything readable from `input` and write the literal to `out`.
///
/// The literal's opening run is assumed to sit at `options.column`; later
/// lines are indented to match.
pub fn encode_stdin(
    input: &mut impl Read,
    options: &CliOptions,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut content = String::new();
    input.read_to_string(&mut content)?;
    let literal = encode_literal(&content, options.column);
    let delimiter_len = if literal == EMPTY_STRING {
        0
    } else {
        literal.bytes().take_while(|&b| b == b'"').count()
    };
    tracing::debug!(
        content_len = content.len(),
        delimiter_len,
        column = options.column,
        "encoded stdin"
    );

    if options.json {
        let report = EncodeReport {
            column: options.column,
            delimiter_len,
            literal: &literal,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{literal}")?;
    }
    Ok(())
}
