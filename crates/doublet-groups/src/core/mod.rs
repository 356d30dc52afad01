//! # Core Module
//!
//! Stateless building blocks of the doublet classification.
//!
//! - **Doublet Representation** ([`models`]) - Identifiers, pair types, descriptors,
//!   records, category paths and curated expert entries
//! - **Classification Rules** ([`taxonomy`]) - Orientation reversal, descriptor
//!   simplification and the agreement-independent category taxonomy
//! - **File I/O** ([`io`]) - Contact graphs, expert directories, doublet
//!   dictionaries and gzip-aware JSON helpers
//!
//! Nothing here holds state across doublets; accumulation into result tables
//! happens in [`crate::engine`].

pub mod io;
pub mod models;
pub mod taxonomy;
