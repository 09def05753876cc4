//! Command handlers for the `quill` CLI.
//!
//! Each submodule implements one command. File reading, parallel
//! processing and JSON output are shared and live here.

use std::io::{self, Write};

use rayon::prelude::*;

use crate::options::CliOptions;
use crate::report::{Detail, FileReport};

mod encode;
mod graphemes;
mod lex;
mod names;

pub use encode::encode_stdin;
pub use graphemes::cluster_files;
pub use lex::lex_files;
pub use names::name_files;

/// Read a source file, turning I/O failures into a message for the user.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

fn report_file(path: &str, detail: Detail<'_>) -> FileReport {
    match read_file(path) {
        Ok(source) => FileReport::build(path, &source, detail),
        Err(message) => FileReport::unreadable(path, message),
    }
}

/// Build a report per file, in input order.
///
/// Files are processed on a scoped rayon pool when `options.parallel` is set
/// and there is more than one file. If the pool can't be built we fall back
/// to sequential processing.
pub(crate) fn build_reports(
    paths: &[String],
    options: &CliOptions,
    detail: Detail<'_>,
) -> Vec<FileReport> {
    let sequential = || -> Vec<FileReport> {
        paths.iter().map(|p| report_file(p, detail)).collect()
    };
    if !options.parallel || paths.len() < 2 {
        return sequential();
    }

    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| paths.par_iter().map(|p| report_file(p, detail)).collect())
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to build thread pool, processing sequentially: {e}");
            sequential()
        })
}

/// Write `reports` in the selected format and return the error count.
pub(crate) fn emit(
    reports: &[FileReport],
    options: &CliOptions,
    out: &mut impl Write,
    render: impl Fn(&FileReport, &mut dyn Write) -> io::Result<()>,
) -> io::Result<usize> {
    if options.json {
        serde_json::to_writer_pretty(&mut *out, reports)?;
        writeln!(out)?;
    } else {
        for report in reports {
            writeln!(out, "{}:", report.path)?;
            if let Some(message) = &report.read_error {
                writeln!(out, "  error: {message}")?;
                continue;
            }
            render(report, &mut *out)?;
        }
    }
    Ok(reports.iter().map(FileReport::error_count).sum())
}

/// Text line for a literal that failed to lex or decode.
pub(crate) fn write_literal_error(
    out: &mut dyn Write,
    span: &str,
    error: &crate::report::ErrorReport,
) -> io::Result<()> {
    writeln!(out, "  {span}  error: {}", error.message)?;
    for suggestion in &error.suggestions {
        writeln!(out, "      help: {suggestion}")?;
    }
    Ok(())
}
