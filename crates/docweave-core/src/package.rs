//! ZIP container writer

use std::io::{Seek, Write};

use ahash::AHashSet;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::{Error, Result};

/// Writes package parts into a ZIP archive.
///
/// Parts are stored in the order they are written. Writing the same part
/// name twice is an error.
pub struct PackageWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
    written: AHashSet<String>,
}

impl<W: Write + Seek> PackageWriter<W> {
    /// Start a new package on top of `writer`
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            options: SimpleFileOptions::default(),
            written: AHashSet::new(),
        }
    }

    /// Write one part. `name` is the archive path without a leading `/`.
    pub fn write_part(&mut self, name: &str, data: &[u8]) -> Result<()> {
        let name = name.trim_start_matches('/');
        if !self.written.insert(name.to_string()) {
            return Err(Error::DuplicatePart(name.to_string()));
        }
        log::debug!("writing part {} ({} bytes)", name, data.len());
        self.zip.start_file(name, self.options)?;
        self.zip.write_all(data)?;
        Ok(())
    }

    /// Write one XML part from a string
    pub fn write_xml(&mut self, name: &str, xml: &str) -> Result<()> {
        self.write_part(name, xml.as_bytes())
    }

    /// Check whether a part has already been written
    pub fn contains(&self, name: &str) -> bool {
        self.written.contains(name.trim_start_matches('/'))
    }

    /// Number of parts written so far
    pub fn part_count(&self) -> usize {
        self.written.len()
    }

    /// Write the central directory and return the underlying writer
    pub fn finish(self) -> Result<W> {
        let count = self.written.len();
        let inner = self.zip.finish()?;
        log::debug!("package finished with {} parts", count);
        Ok(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn test_write_and_read_back() {
        let mut pkg = PackageWriter::new(Cursor::new(Vec::new()));
        pkg.write_xml("[Content_Types].xml", "<Types/>").unwrap();
        pkg.write_part("/media/a.png", &[0x89, b'P', b'N', b'G']).unwrap();
        assert!(pkg.contains("media/a.png"));
        assert_eq!(pkg.part_count(), 2);

        let cursor = pkg.finish().unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");

        let mut image = Vec::new();
        archive
            .by_name("media/a.png")
            .unwrap()
            .read_to_end(&mut image)
            .unwrap();
        assert_eq!(image, vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_duplicate_part_is_rejected() {
        let mut pkg = PackageWriter::new(Cursor::new(Vec::new()));
        pkg.write_xml("document/document.xml", "<a/>").unwrap();
        let err = pkg.write_xml("/document/document.xml", "<b/>").unwrap_err();
        assert!(matches!(err, Error::DuplicatePart(ref name) if name == "document/document.xml"));
    }
}
