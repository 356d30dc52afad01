//! # Doublet Groups Core Library
//!
//! Consensus classification of RNA doublets annotated by several independent
//! programs (RNAView, MC-Annotate, MoDeRNA, FR3D), and aggregation of the
//! per-structure results into global category tables.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless value types (identifiers, pair
//!   types, descriptors, category paths), the orientation-reversal and
//!   taxonomy rules, and readers for contact graphs, expert folders and
//!   doublet dictionaries.
//!
//! - **[`engine`]: The Logic Core.** The result table, the consensus resolver
//!   that turns program agreement into `classifier/*` and `fuzzy/*`
//!   categories, expert overrides, configuration and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete dictionary, graph and merge
//!   runs built from the two layers below.

pub mod core;
pub mod engine;
pub mod workflows;
