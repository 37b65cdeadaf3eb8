//! End-to-end pipeline: load rows, aggregate them, summarize every variant.
//!
//! `run_report` writes each line as soon as it is known, so the lines for
//! variants summarized before a fatal error are still emitted.

use std::{io::Write, path::Path};

use log::debug;

use crate::{
    SummaryError,
    aggregate::{Aggregator, Ingest, RowWarning},
    loader::{RawRow, load_rows},
    summary::{Summarizer, SummaryConfig, VariantSummary},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub warnings: Vec<RowWarning>,
    pub summaries: Vec<VariantSummary>,
}

pub fn run_report<P, W>(path: P, config: SummaryConfig, out: &mut W) -> Result<(), SummaryError>
where
    P: AsRef<Path>,
    W: Write,
{
    let rows = load_rows(path)?;
    write_report(&rows, config, out)
}

pub fn write_report<W: Write>(
    rows: &[RawRow],
    config: SummaryConfig,
    out: &mut W,
) -> Result<(), SummaryError> {
    let aggregator = aggregate_rows(rows, |warning| writeln!(out, "{warning}"))?;
    let summarizer = Summarizer::new(&aggregator, rows, config);
    for variant in summarizer.variants() {
        let summary = summarizer.summarize_variant(variant);
        match summary {
            Ok(summary) => writeln!(out, "{summary}")?,
            Err(err) => {
                out.flush()?;
                return Err(err);
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Collects warnings and summaries without writing anything.
pub fn build_report(rows: &[RawRow], config: SummaryConfig) -> Result<Report, SummaryError> {
    let mut warnings = Vec::new();
    let aggregator = aggregate_rows(rows, |warning| {
        warnings.push(warning.clone());
        Ok(())
    })?;
    let summaries = Summarizer::new(&aggregator, rows, config).summarize_all()?;
    Ok(Report {
        warnings,
        summaries,
    })
}

fn aggregate_rows<F>(rows: &[RawRow], mut on_warning: F) -> Result<Aggregator, SummaryError>
where
    F: FnMut(&RowWarning) -> std::io::Result<()>,
{
    let mut aggregator = Aggregator::new();
    let mut rejected = 0usize;
    for row in rows {
        if let Ingest::Rejected(warning) = aggregator.ingest(row) {
            rejected += 1;
            on_warning(&warning)?;
        }
    }
    debug!(
        "aggregated {} subjects, {} rows rejected",
        aggregator.len(),
        rejected
    );
    Ok(aggregator)
}
