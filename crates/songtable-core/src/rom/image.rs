//! ROM image loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

use super::RomHeader;

/// A ROM image read fully into memory.
#[derive(Debug, Clone)]
pub struct RomImage {
    path: PathBuf,
    data: Vec<u8>,
}

impl RomImage {
    /// Load an entire ROM file into memory. Empty files are rejected.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        if data.is_empty() {
            return Err(Error::EmptyRom(path.display().to_string()));
        }
        debug!("loaded {} ({} bytes)", path.display(), data.len());

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Wrap an in-memory buffer as an image.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            path: PathBuf::new(),
            data,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directories, for display.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cartridge header fields, when the image is large enough to have them.
    pub fn header(&self) -> Option<RomHeader> {
        RomHeader::parse(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reads_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.gba");
        fs::write(&path, [0xDE, 0xAD, 0xBE, 0xEF]).unwrap();

        let image = RomImage::load(&path).unwrap();
        assert_eq!(image.len(), 4);
        assert_eq!(image.bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(image.name(), "test.gba");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RomImage::load(dir.path().join("missing.gba")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.gba");
        fs::write(&path, b"").unwrap();

        let err = RomImage::load(&path).unwrap_err();
        assert!(matches!(err, Error::EmptyRom(_)));
    }

    #[test]
    fn test_header_from_image() {
        let mut data = vec![0u8; 0xC0];
        data[0xA0..0xA7].copy_from_slice(b"MOTHER3");
        let image = RomImage::from_bytes(data);
        assert_eq!(image.header().unwrap().title, "MOTHER3");

        let tiny = RomImage::from_bytes(vec![0u8; 16]);
        assert_eq!(tiny.header(), None);
    }
}
