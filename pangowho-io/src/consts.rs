/// Default location of the core prefix table.
pub const DEFAULT_CORE_MAPPING: &str = "mapping.core.csv";

/// Default location the full mapping table is written to.
pub const DEFAULT_FULL_MAPPING: &str = "mapping.full.json";

/// Default location the lineage metadata export is written to.
pub const DEFAULT_METADATA_CSV: &str = "metadata.csv";

/// Lineage metadata feed: lineage name to summary (clade, unaliased name, ...).
pub const LINEAGE_SUMMARY_URL: &str =
    "https://github.com/corneliusroemer/pango-sequences/raw/main/data/pango-consensus-sequences_summary.json";

/// Published full mapping table.
pub const FULL_MAPPING_URL: &str =
    "https://github.com/denniemok/pango-lineage-to-who-label/raw/main/mapping.full.json";

/// Header row of the lineage metadata export.
pub const METADATA_CSV_HEADER: [&str; 3] = ["lineage", "nextclade", "unaliased"];

/// Indentation used for the persisted full mapping table.
pub const FULL_MAPPING_INDENT: &[u8] = b"    ";
