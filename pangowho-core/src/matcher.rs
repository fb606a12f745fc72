//!
//! Longest-prefix resolution of dotted lineage names.
//!
//! A lineage such as `B.1.617.2.1` is tried against the table as `B.1.617.2.1`,
//! `B.1.617.2`, `B.1.617`, `B.1` and finally `B`. The first candidate present in the
//! table wins. Token contents are never validated; any string is a valid query.
//!
use crate::consts::{LINEAGE_SEPARATOR, UNKNOWN_WHO_LABEL};
use crate::models::LabelLookup;

///
/// A successful resolution: the prefix of the query that hit the table and the
/// label stored under it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch<'l, 't> {
    pub prefix: &'l str,
    pub label: &'t str,
}

///
/// Candidate prefixes of a lineage, longest first.
///
/// Splitting `lineage` on `.` and re-joining the first *k* tokens, for *k* from the
/// token count down to 1, is the same as cutting the string at each separator from
/// the right, so every candidate borrows from the input.
///
pub fn candidate_prefixes(lineage: &str) -> impl Iterator<Item = &str> {
    std::iter::once(lineage).chain(
        lineage
            .rmatch_indices(LINEAGE_SEPARATOR)
            .map(move |(idx, _)| &lineage[..idx]),
    )
}

///
/// Resolve the most specific known prefix of a lineage.
///
/// # Arguments
/// - `lineage`: the lineage to resolve
/// - `table`: the prefix table to probe
///
/// # Returns
/// - the matching prefix and its label, or `None` if no prefix is in the table
///
pub fn resolve<'l, 't, T>(lineage: &'l str, table: &'t T) -> Option<PrefixMatch<'l, 't>>
where
    T: LabelLookup + ?Sized,
{
    let hit = candidate_prefixes(lineage)
        .find_map(|prefix| table.get_label(prefix).map(|label| PrefixMatch { prefix, label }));

    if let Some(hit) = &hit {
        log::trace!("{} matched prefix {} ({})", lineage, hit.prefix, hit.label);
    }

    hit
}

/// Like [`resolve`], keeping only the label.
pub fn resolve_label<'t, T>(lineage: &str, table: &'t T) -> Option<&'t str>
where
    T: LabelLookup + ?Sized,
{
    resolve(lineage, table).map(|hit| hit.label)
}

/// Resolve a label, falling back to [`UNKNOWN_WHO_LABEL`] when nothing matches.
pub fn resolve_or_unknown<T>(lineage: &str, table: &T) -> String
where
    T: LabelLookup + ?Sized,
{
    resolve_label(lineage, table)
        .unwrap_or(UNKNOWN_WHO_LABEL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrefixMap;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn core_table() -> PrefixMap {
        [
            ("B", "Beta-root"),
            ("B.1.1.7", "Alpha"),
            ("B.1.617.2", "Delta"),
            ("AY", "Delta"),
            ("B.1.1.529", "Omicron"),
            ("BA", "Omicron"),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    fn test_candidate_prefixes_longest_first() {
        let candidates: Vec<&str> = candidate_prefixes("B.1.617.2").collect();
        assert_eq!(candidates, vec!["B.1.617.2", "B.1.617", "B.1", "B"]);
    }

    #[rstest]
    #[case("", vec![""])]
    #[case("XBB", vec!["XBB"])]
    #[case("B.", vec!["B.", "B"])]
    #[case(".B", vec![".B", ""])]
    #[case("B..1", vec!["B..1", "B.", "B"])]
    fn test_candidate_prefixes_keep_empty_tokens(#[case] lineage: &str, #[case] expected: Vec<&str>) {
        let candidates: Vec<&str> = candidate_prefixes(lineage).collect();
        assert_eq!(candidates, expected);
    }

    #[rstest]
    fn test_longest_prefix_wins(core_table: PrefixMap) {
        let hit = resolve("B.1.617.2.1", &core_table).unwrap();
        assert_eq!(hit.prefix, "B.1.617.2");
        assert_eq!(hit.label, "Delta");
    }

    #[rstest]
    #[case("B.1.617.2", "Delta")]
    #[case("AY.4.2", "Delta")]
    #[case("B.1.1.7", "Alpha")]
    #[case("B.1.1.529.2.75", "Omicron")]
    #[case("BA.5", "Omicron")]
    #[case("B.1.351", "Beta-root")]
    fn test_resolve_label(core_table: PrefixMap, #[case] lineage: &str, #[case] expected: &str) {
        assert_eq!(resolve_label(lineage, &core_table), Some(expected));
    }

    #[rstest]
    fn test_first_token_is_the_last_candidate() {
        let table: PrefixMap = [("A", "x")].into_iter().collect();
        assert_eq!(resolve_label("A.1.2", &table), Some("x"));
        assert_eq!(resolve("C.1", &table), None);
    }

    #[rstest]
    fn test_no_partial_token_matches() {
        // "BA" is a key but "B" is not, and "BQ" must not match "B" by substring
        let table: PrefixMap = [("BA", "Omicron")].into_iter().collect();
        assert_eq!(resolve_label("BQ.1", &table), None);
        assert_eq!(resolve_label("B", &table), None);
    }

    #[rstest]
    fn test_label_is_returned_verbatim() {
        let table: PrefixMap = [("P.1", " Gamma (P.1) ")].into_iter().collect();
        assert_eq!(resolve_label("P.1.7", &table), Some(" Gamma (P.1) "));
    }

    #[rstest]
    fn test_resolve_or_unknown(core_table: PrefixMap) {
        assert_eq!(resolve_or_unknown("AY.103", &core_table), "Delta");
        assert_eq!(resolve_or_unknown("XBB.1.5", &core_table), UNKNOWN_WHO_LABEL);
    }

    #[rstest]
    fn test_end_to_end_single_row_table() {
        let table: PrefixMap = [("B.1.617.2", "Delta")].into_iter().collect();
        assert_eq!(resolve_label("B.1.617.2.1", &table), Some("Delta"));
        assert_eq!(resolve_label("B.1.1.7", &table), None);
    }
}
