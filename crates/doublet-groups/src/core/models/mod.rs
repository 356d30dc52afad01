//! # Core Models Module
//!
//! Value types describing doublets and the categories they are filed under.
//!
//! ## Key Components
//!
//! - [`ids`] - Doublet identifiers (`pos1:pos2` or `structure:pos1:pos2`)
//! - [`pair`] - Nucleotide pair types and their chemical families
//! - [`descriptor`] - Per-program geometric descriptors
//! - [`program`] - The annotation programs whose output is reconciled
//! - [`record`] - A doublet with the descriptors every program gave it
//! - [`category`] - Category paths, sub-categories and orientation-tagged memberships
//! - [`expert`] - Curated inclusion and exclusion entries
//! - [`error`] - The format error raised on malformed input
//!
//! These types carry no behavior beyond parsing and validation; symmetry
//! transforms live in [`crate::core::taxonomy::reconcile`].

pub mod category;
pub mod descriptor;
pub mod error;
pub mod expert;
pub mod ids;
pub mod pair;
pub mod program;
pub mod record;
