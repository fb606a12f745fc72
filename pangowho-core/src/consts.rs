/// WHO label given to lineages that match no prefix of the core table.
pub const UNKNOWN_WHO_LABEL: &str = "Unknown";

/// Separator between the tokens of a PANGO lineage name.
pub const LINEAGE_SEPARATOR: char = '.';
