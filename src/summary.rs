use std::{collections::BTreeSet, fmt};

use log::debug;
use serde::Serialize;

use crate::{
    SummaryError,
    aggregate::Aggregator,
    loader::RawRow,
    score::score,
    stats::{Decimal, SummaryStats},
};

pub const DEFAULT_BASELINE: &str = "baseline";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryConfig {
    /// Variant every other variant is scored against.
    pub baseline: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE.to_string(),
        }
    }
}

impl SummaryConfig {
    pub fn with_baseline<T: Into<String>>(baseline: T) -> Self {
        Self {
            baseline: baseline.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariantSummary {
    pub variant: String,
    pub stats: SummaryStats,
}

impl fmt::Display for VariantSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: mean = {}, stddev = {}, min = {}, max = {}",
            self.variant,
            Decimal(self.stats.mean),
            Decimal(self.stats.stddev),
            Decimal(self.stats.min),
            Decimal(self.stats.max)
        )
    }
}

/// Every distinct variant named by `rows`, baseline excluded, in ascending
/// order. Rows with rejected values still contribute their variant name.
pub fn variant_set(rows: &[RawRow], baseline: &str) -> BTreeSet<String> {
    rows.iter()
        .filter(|row| row.variant != baseline)
        .map(|row| row.variant.clone())
        .collect()
}

pub struct Summarizer<'a> {
    aggregator: &'a Aggregator,
    variants: BTreeSet<String>,
    config: SummaryConfig,
}

impl<'a> Summarizer<'a> {
    pub fn new(aggregator: &'a Aggregator, rows: &[RawRow], config: SummaryConfig) -> Self {
        let variants = variant_set(rows, &config.baseline);
        Self {
            aggregator,
            variants,
            config,
        }
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    /// Scores of every subject that has a result for `variant`.
    pub fn scores(&self, variant: &str) -> Result<Vec<f64>, SummaryError> {
        self.aggregator
            .subjects()
            .filter(|record| record.has(variant))
            .map(|record| score(record, variant, &self.config.baseline))
            .collect()
    }

    pub fn summarize_variant(&self, variant: &str) -> Result<VariantSummary, SummaryError> {
        let scores = self.scores(variant)?;
        debug!("{variant}: {} scores", scores.len());
        let stats = SummaryStats::from_scores(variant, &scores)?;
        Ok(VariantSummary {
            variant: variant.to_string(),
            stats,
        })
    }

    /// Summaries for every variant in order, stopping at the first failure.
    pub fn summarize_all(&self) -> Result<Vec<VariantSummary>, SummaryError> {
        self.variants()
            .map(|variant| self.summarize_variant(variant))
            .collect()
    }
}
