//! `quill names`: one line per character with its Unicode name.

use std::io::{self, Write};

use crate::options::CliOptions;
use crate::report::{Detail, FileReport};

use super::{build_reports, emit, write_literal_error};

pub fn name_files(paths: &[String], options: &CliOptions, out: &mut impl Write) -> io::Result<usize> {
    let reports = build_reports(paths, options, Detail::Names);
    emit(&reports, options, out, render)
}

fn render(report: &FileReport, out: &mut dyn Write) -> io::Result<()> {
    for literal in &report.literals {
        if let Some(error) = &literal.error {
            write_literal_error(out, &literal.span, error)?;
            continue;
        }
        writeln!(out, "  {}", literal.span)?;
        for c in &literal.names {
            writeln!(out, "    {:<9} {}", c.code_point, c.name)?;
        }
    }
    Ok(())
}
