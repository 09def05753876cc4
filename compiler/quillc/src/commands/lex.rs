//! `quill lex`: list every literal and its decoded value.

use std::io::{self, Write};

use crate::options::CliOptions;
use crate::report::{Detail, FileReport};

use super::{build_reports, emit, write_literal_error};

/// Lex each file and print its literals. Returns the number of errors.
pub fn lex_files(paths: &[String], options: &CliOptions, out: &mut impl Write) -> io::Result<usize> {
    let reports = build_reports(paths, options, Detail::Value);
    emit(&reports, options, out, render)
}

fn render(report: &FileReport, out: &mut dyn Write) -> io::Result<()> {
    for literal in &report.literals {
        if let Some(error) = &literal.error {
            write_literal_error(out, &literal.span, error)?;
            continue;
        }
        let form = literal.form.unwrap_or_default();
        let n = literal.delimiter_len.unwrap_or_default();
        match literal.column {
            Some(column) => write!(out, "  {}  {form} N={n} column={column}", literal.span)?,
            None => write!(out, "  {}  {form} N={n}", literal.span)?,
        }
        writeln!(out, "  {:?}", literal.value.as_deref().unwrap_or_default())?;
    }
    Ok(())
}
