///
/// One lineage of the upstream metadata feed.
///
/// `lineage` is the name the lineage is published under, which may be an alias
/// (`BA.2`). `unaliased` is its fully expanded ancestry path (`B.1.1.529.2`); for
/// lineages that are not aliased the two are equal.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageRecord {
    pub lineage: String,
    pub nextstrain_clade: String,
    pub unaliased: String,
}

impl LineageRecord {
    pub fn new(
        lineage: impl Into<String>,
        unaliased: impl Into<String>,
        nextstrain_clade: impl Into<String>,
    ) -> Self {
        LineageRecord {
            lineage: lineage.into(),
            nextstrain_clade: nextstrain_clade.into(),
            unaliased: unaliased.into(),
        }
    }

    /// Whether the published name differs from the expanded one.
    pub fn is_aliased(&self) -> bool {
        self.lineage != self.unaliased
    }
}
