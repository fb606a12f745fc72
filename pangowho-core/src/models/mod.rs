pub mod full_map;
pub mod lineage;
pub mod prefix_map;

// re-export for cleaner imports
pub use self::full_map::{FullMap, FullMapEntry};
pub use self::lineage::LineageRecord;
pub use self::prefix_map::{LabelLookup, PrefixMap};
