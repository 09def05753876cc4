//! `quill graphemes`: split each literal's value into clusters.

use std::io::{self, Write};

use crate::options::CliOptions;
use crate::report::{Detail, FileReport};

use super::{build_reports, emit, write_literal_error};

/// Cluster every literal with the strategy chosen in `options`.
pub fn cluster_files(
    paths: &[String],
    options: &CliOptions,
    out: &mut impl Write,
) -> io::Result<usize> {
    let strategy = options.strategy.build(options.max_cluster);
    tracing::debug!(
        strategy = strategy.name(),
        max_cluster = strategy.max_cluster_len(),
        "clustering"
    );
    let reports = build_reports(paths, options, Detail::Clusters(&*strategy));
    emit(&reports, options, out, render)
}

fn render(report: &FileReport, out: &mut dyn Write) -> io::Result<()> {
    for literal in &report.literals {
        if let Some(error) = &literal.error {
            write_literal_error(out, &literal.span, error)?;
            continue;
        }
        writeln!(
            out,
            "  {}  {} cluster(s)  {:?}",
            literal.span,
            literal.clusters.len(),
            literal.clusters
        )?;
    }
    Ok(())
}
