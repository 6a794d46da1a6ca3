//! Per-ROM scan summaries for batch tooling.

use serde::Serialize;

use crate::error::Result;
use crate::rom::{RomHeader, RomImage};
use crate::search::locate_song_table;

/// Result of scanning one ROM, in a shape batch tools can consume as
/// NDJSON (one object per ROM).
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// ROM file name.
    pub rom: String,
    /// Cartridge header fields, when present.
    pub header: Option<RomHeader>,
    /// Whether the select-song routine matched.
    pub found: bool,
    /// File offset of the song-table pointer.
    pub pointer_offset: Option<usize>,
    /// Address of the song table, when the pointer value is a valid ROM
    /// pointer.
    pub song_table: Option<String>,
}

impl ScanReport {
    /// Scan an image and summarize the outcome.
    pub fn scan(image: &RomImage) -> Self {
        let location = locate_song_table(image.bytes());

        Self {
            rom: image.name(),
            header: image.header(),
            found: location.is_some(),
            pointer_offset: location.map(|loc| loc.pointer),
            song_table: location
                .and_then(|loc| loc.table)
                .map(|ptr| ptr.to_string()),
        }
    }

    /// Serialize the report as a single JSON line.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SELECT_SONG_PATTERN, TABLE_POINTER_OFFSET};

    fn image_with_song_table(at: usize, table: u32) -> RomImage {
        let mut data = vec![0u8; 0x1000];
        data[at..at + SELECT_SONG_PATTERN.len()].copy_from_slice(&SELECT_SONG_PATTERN);
        let pointer = at + TABLE_POINTER_OFFSET;
        data[pointer..pointer + 4].copy_from_slice(&table.to_le_bytes());
        RomImage::from_bytes(data)
    }

    #[test]
    fn test_scan_found() {
        let image = image_with_song_table(0x200, 0x0812_3456);
        let report = ScanReport::scan(&image);

        assert!(report.found);
        assert_eq!(report.pointer_offset, Some(0x228));
        assert_eq!(report.song_table.as_deref(), Some("0x08123456"));
    }

    #[test]
    fn test_scan_not_found() {
        let image = RomImage::from_bytes(vec![0u8; 0x1000]);
        let report = ScanReport::scan(&image);

        assert!(!report.found);
        assert_eq!(report.pointer_offset, None);
        assert_eq!(report.song_table, None);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let image = image_with_song_table(0x200, 0x0812_3456);
        let json = ScanReport::scan(&image).to_json().unwrap();

        assert!(json.contains("\"found\":true"));
        assert!(json.contains("\"pointer_offset\":552"));
        assert!(json.contains("\"song_table\":\"0x08123456\""));
    }
}
