use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::Path;

use pangowho_core::LineageRecord;

use crate::consts::METADATA_CSV_HEADER;
use crate::error::Result;

pub trait MetadataWrite {
    ///
    /// Write `lineage,nextclade,unaliased` rows, header first, in record order.
    ///
    /// # Arguments
    /// - writer: where to write the CSV document
    fn write_csv_to<W: Write>(&self, writer: W) -> Result<()>;

    ///
    /// Write the metadata export to disk.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_csv<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

impl MetadataWrite for [LineageRecord] {
    fn write_csv_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        csv_writer.write_record(METADATA_CSV_HEADER)?;
        for record in self {
            csv_writer.write_record([
                record.lineage.as_str(),
                record.nextstrain_clade.as_str(),
                record.unaliased.as_str(),
            ])?;
        }
        csv_writer.flush()?;

        Ok(())
    }

    fn write_csv<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        self.write_csv_to(file)?;

        log::info!("Wrote {} lineages to {}", self.len(), path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_metadata_rows_follow_feed_order() {
        let records = vec![
            LineageRecord::new("XBB.1.5", "XBB.1.5", "23A"),
            LineageRecord::new("AY.4", "B.1.617.2.4", "21J"),
        ];

        let mut buffer = Vec::new();
        records.write_csv_to(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "lineage,nextclade,unaliased\nXBB.1.5,23A,XBB.1.5\nAY.4,21J,B.1.617.2.4\n"
        );
    }

    #[rstest]
    fn test_write_metadata_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.csv");
        let records = vec![LineageRecord::new("BA.2", "B.1.1.529.2", "21L")];

        records.write_csv(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert_eq!(contents.lines().last(), Some("BA.2,21L,B.1.1.529.2"));
    }
}
