//! # Input/Output utilities for pangowho.
//!
//! Everything that touches the outside world lives here: reading the core prefix
//! table (`mapping.core.csv`), fetching and parsing the lineage metadata feed,
//! persisting and loading the full mapping table (`mapping.full.json`), and
//! exporting the feed as `metadata.csv`.
//!
//! Each input is described by a [`Source`], which is either a local file (optionally
//! gzipped) or an `http(s)` URL. Every failure to acquire or decode a source is a
//! [`SourceError`]; callers treat all of them as fatal.
//!
pub mod consts;
pub mod core_table;
pub mod error;
pub mod full_map;
pub mod lineage_feed;
pub mod metadata;
pub mod source;

// re-expose core functions
pub use consts::*;
pub use core_table::*;
pub use error::*;
pub use full_map::*;
pub use lineage_feed::*;
pub use metadata::*;
pub use source::*;
