//! # Workflows Module
//!
//! End-to-end procedures, one per aggregation mode. Each takes already
//! loaded inputs, reports progress through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter) and returns
//! a [`ResultTable`] for the caller to persist.
//!
//! - **Dictionary aggregation** ([`dict`]) - classifies the doublets of a
//!   pre-merged dictionary
//! - **Graph aggregation** ([`graphs`]) - classifies one structure from the
//!   per-program contact graphs and applies expert overrides
//! - **Cross-structure merge** ([`merge`]) - folds stored per-structure tables
//!   into one global table

use crate::engine::table::ResultTable;
use tracing::info;

pub mod dict;
pub mod graphs;
pub mod merge;

fn log_table_stats(table: &ResultTable) {
    let stats = table.stats();
    info!("Result table holds {} group(s).", stats.len());
    for (path, count) in stats {
        info!("{:>8}  {}", count, path);
    }
}
