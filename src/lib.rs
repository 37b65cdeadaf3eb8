//! Per-variant benchmark summaries relative to a baseline variant.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod aggregate;
pub mod bench_utils;
pub mod cli;
pub mod errors;
pub mod loader;
pub mod report;
pub mod score;
pub mod stats;
pub mod summary;

pub use crate::aggregate::{Aggregator, Ingest, RowWarning, SubjectRecord};
pub use crate::errors::SummaryError;
pub use crate::loader::{RawRow, is_digit_literal, load_rows, read_rows};
pub use crate::report::{Report, build_report, run_report, write_report};
pub use crate::score::score;
pub use crate::stats::{Decimal, SummaryStats};
pub use crate::summary::{DEFAULT_BASELINE, Summarizer, SummaryConfig, VariantSummary};
