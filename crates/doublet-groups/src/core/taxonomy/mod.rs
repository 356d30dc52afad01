//! # Taxonomy Module
//!
//! Pure functions that decide which categories a doublet is filed under.
//!
//! - [`reconcile`] - Orientation reversal of identifiers, pair types and
//!   descriptors, plus program-specific descriptor simplification
//! - [`unconditional`] - The agreement-independent taxonomy (`all/*`,
//!   `recognized/*`, `unclassified/*`, `descriptions/*`)
//!
//! Agreement-dependent categories (`classifier/*`, `fuzzy/*`) are computed by
//! [`crate::engine::consensus`].

pub mod reconcile;
pub mod unconditional;
