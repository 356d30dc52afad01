//! Provides input/output for the files the aggregation reads and writes.
//!
//! Contact graphs, expert annotation folders and pre-merged doublet
//! dictionaries are all JSON documents, optionally gzip-compressed. Every
//! annotation program's output is reached through the [`traits::ContactSource`]
//! trait so that a missing program can be replaced by an empty source.

pub mod dict;
pub mod error;
pub mod expert;
pub mod graph;
pub mod json;
pub mod traits;
