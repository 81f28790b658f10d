use std::io::{Cursor, Write};

use thiserror::Error;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// The only entry in a portfolio archive, at the root.
pub const ENTRY_NAME: &str = "index.html";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Packs `html` verbatim as a Deflate-compressed `index.html`.
pub fn build_portfolio_zip(html: &str) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(ENTRY_NAME, options)?;
    writer.write_all(html.as_bytes())?;

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_single_deflated_index_entry() {
        let html = "<!DOCTYPE html><html><body>Jane &amp; Co</body></html>";
        let bytes = build_portfolio_zip(html).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 1);

        let mut entry = archive.by_index(0).unwrap();
        assert_eq!(entry.name(), "index.html");
        assert_eq!(entry.compression(), CompressionMethod::Deflated);

        let mut contents = String::new();
        entry.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, html);
    }

    #[test]
    fn test_archive_starts_with_local_header() {
        let bytes = build_portfolio_zip("x").unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }
}
