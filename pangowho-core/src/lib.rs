//! # pangowho-core
//!
//! Core data model and algorithms for mapping PANGO lineages to WHO variant labels.
//!
//! A small, curated [`PrefixMap`] assigns WHO labels to a handful of lineage prefixes
//! (`B.1.617.2 -> Delta`, `BA -> Omicron`, ...). Every other lineage is resolved by
//! walking its dot-separated name from the most to the least specific prefix until a
//! known one is found, see [`matcher::resolve`]. The [`FullMappingBuilder`] uses that
//! same resolution to expand a list of [`LineageRecord`]s into a denormalized
//! [`FullMap`] keyed by both the aliased and the unaliased lineage names.
//!
//! ```rust
//! use pangowho_core::{PrefixMap, matcher::resolve_label};
//!
//! let table: PrefixMap = [("B.1.617.2", "Delta")].into_iter().collect();
//!
//! assert_eq!(resolve_label("B.1.617.2.1", &table), Some("Delta"));
//! assert_eq!(resolve_label("B.1.1.7", &table), None);
//! ```
//!
//! This crate does no I/O; loading and persisting tables lives in `pangowho-io`.
pub mod builder;
pub mod consts;
pub mod matcher;
pub mod models;

// re-export for cleaner imports
pub use builder::{BuildSummary, FullMappingBuilder};
pub use models::{FullMap, FullMapEntry, LabelLookup, LineageRecord, PrefixMap};
