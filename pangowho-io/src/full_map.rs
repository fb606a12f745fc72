use std::fs::{File, create_dir_all};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use pangowho_core::FullMap;

use crate::consts::FULL_MAPPING_INDENT;
use crate::error::Result;
use crate::source::Source;

///
/// Pretty-printing that escapes every character outside printable ASCII as `\uXXXX`
/// (a surrogate pair above the BMP), so the published table stays pure ASCII.
///
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl<'a> AsciiFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        AsciiFormatter {
            pretty: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;

        for (i, c) in fragment.char_indices() {
            if (' '..='~').contains(&c) {
                continue;
            }

            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }

        writer.write_all(&fragment.as_bytes()[start..])
    }
}

pub trait MappingWrite {
    ///
    /// Write the table as JSON: keys sorted, nested fields sorted, four-space indent,
    /// non-ASCII characters escaped.
    ///
    /// # Arguments
    /// - writer: where to write the document
    fn write_json_to<W: Write>(&self, writer: W) -> Result<()>;

    ///
    /// Write the table to disk as JSON, creating parent directories as needed.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_json<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

impl MappingWrite for FullMap {
    fn write_json_to<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = AsciiFormatter::with_indent(FULL_MAPPING_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)?;
        Ok(())
    }

    fn write_json<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json_to(&mut writer)?;
        writer.flush()?;

        log::info!("Wrote {} entries to {}", self.len(), path.display());

        Ok(())
    }
}

///
/// Parse a full mapping table document.
///
pub fn parse_full_map<R: Read>(reader: R) -> Result<FullMap> {
    Ok(serde_json::from_reader(reader)?)
}

///
/// Load a persisted full mapping table from a file or URL.
///
pub fn read_full_map(source: &Source) -> Result<FullMap> {
    let full_map = parse_full_map(source.open()?)?;
    log::info!("Loaded {} entries from {}", full_map.len(), source);
    Ok(full_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pangowho_core::{FullMappingBuilder, LineageRecord, PrefixMap};

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn full_map() -> FullMap {
        let table: PrefixMap = [("B.1.617.2", "Delta"), ("AY", "Delta")].into_iter().collect();
        let records = vec![
            LineageRecord::new("B.1.617.2", "B.1.617.2", "21A"),
            LineageRecord::new("AY.4", "B.1.617.2.4", "21J"),
        ];
        FullMappingBuilder::new(&table).build(&records)
    }

    #[rstest]
    fn test_layout_of_written_document() {
        let table: PrefixMap = [("B.1.617.2", "Delta")].into_iter().collect();
        let records = vec![LineageRecord::new("B.1.617.2", "B.1.617.2", "21A")];
        let full_map = FullMappingBuilder::new(&table).build(&records);

        let mut buffer = Vec::new();
        full_map.write_json_to(&mut buffer).unwrap();

        let expected = r#"{
    "B.1.617.2": {
        "aliased": "B.1.617.2",
        "nextclade": "21A",
        "unaliased": "B.1.617.2",
        "wholabel": "Delta"
    }
}"#;
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }

    #[rstest]
    fn test_keys_are_sorted(full_map: FullMap) {
        let mut buffer = Vec::new();
        full_map.write_json_to(&mut buffer).unwrap();
        let doc = String::from_utf8(buffer).unwrap();

        let ay = doc.find("\"AY.4\": {").unwrap();
        let delta = doc.find("\"B.1.617.2\": {").unwrap();
        let delta_sub = doc.find("\"B.1.617.2.4\": {").unwrap();
        assert_eq!(ay < delta && delta < delta_sub, true);
    }

    #[rstest]
    fn test_written_table_reads_back(full_map: FullMap) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("mapping.full.json");

        full_map.write_json(&path).unwrap();
        let loaded = read_full_map(&Source::from(path.as_path())).unwrap();

        assert_eq!(loaded, full_map);
    }

    #[rstest]
    fn test_read_published_table() {
        let full_map = read_full_map(&Source::parse("../tests/data/mapping.full.json")).unwrap();

        let entry = full_map.get("BA.2").unwrap();
        assert_eq!(entry.wholabel, "Omicron");
        assert_eq!(entry.unaliased, "B.1.1.529.2");
        assert_eq!(full_map.get("BA.2.86"), None);
    }

    #[rstest]
    fn test_non_ascii_is_escaped() {
        let table: PrefixMap = [("B.1.617.2", "Delta é😷")].into_iter().collect();
        let records = vec![LineageRecord::new("B.1.617.2", "B.1.617.2", "21A\u{7f}")];
        let full_map = FullMappingBuilder::new(&table).build(&records);

        let mut buffer = Vec::new();
        full_map.write_json_to(&mut buffer).unwrap();
        let doc = String::from_utf8(buffer).unwrap();

        assert_eq!(doc.is_ascii(), true);
        assert_eq!(doc.contains(r#""wholabel": "Delta \u00e9\ud83d\ude37""#), true);
        assert_eq!(doc.contains(r#""nextclade": "21A\u007f""#), true);
        assert_eq!(parse_full_map(doc.as_bytes()).unwrap(), full_map);
    }
}
