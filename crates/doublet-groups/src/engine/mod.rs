//! # Engine Module
//!
//! The stateful half of the classification: result tables that accumulate
//! memberships, the consensus resolver that turns per-program descriptors into
//! `classifier/*` and `fuzzy/*` categories, and the expert override merger.
//!
//! - **Result Tables** ([`table`]) - Category path to ordered member list
//! - **Consensus** ([`consensus`]) - Agreement resolution per sub-category
//! - **Expert Overrides** ([`overrides`]) - Curated inclusion and exclusion
//! - **Table Storage** ([`store`]) - Locating persisted per-structure tables
//! - **Configuration** ([`config`]) - Aggregation and merge settings
//! - **Progress Monitoring** ([`progress`]) - Progress callbacks for front ends
//! - **Error Handling** ([`error`]) - Engine-level error type

pub mod config;
pub mod consensus;
pub mod error;
pub mod overrides;
pub mod progress;
pub mod store;
pub mod table;
