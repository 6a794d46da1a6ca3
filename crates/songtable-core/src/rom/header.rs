//! Cartridge header fields.

use serde::Serialize;

// Identity fields start at 0xA0: 12-byte title, 4-byte game code, 2-byte
// maker code.
const TITLE_OFFSET: usize = 0xA0;
const TITLE_LEN: usize = 12;
const CODE_LEN: usize = 4;
const MAKER_LEN: usize = 2;

/// Identity fields from a ROM's cartridge header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomHeader {
    /// Game title, up to 12 characters.
    pub title: String,
    /// Four-character game code.
    pub code: String,
    /// Two-character maker code.
    pub maker: String,
}

impl RomHeader {
    /// Parse the identity fields, or `None` when the image is too small to
    /// contain them.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let raw = data.get(TITLE_OFFSET..TITLE_OFFSET + TITLE_LEN + CODE_LEN + MAKER_LEN)?;
        Some(RomHeader {
            title: header_text(&raw[..TITLE_LEN]),
            code: header_text(&raw[TITLE_LEN..TITLE_LEN + CODE_LEN]),
            maker: header_text(&raw[TITLE_LEN + CODE_LEN..]),
        })
    }
}

fn header_text(bytes: &[u8]) -> String {
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..len]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_with_header(title: &str, code: &str, maker: &str) -> Vec<u8> {
        let mut data = vec![0u8; 0xC0];
        data[0xA0..0xA0 + title.len()].copy_from_slice(title.as_bytes());
        data[0xAC..0xAC + code.len()].copy_from_slice(code.as_bytes());
        data[0xB0..0xB0 + maker.len()].copy_from_slice(maker.as_bytes());
        data
    }

    #[test]
    fn test_parse_header_fields() {
        let data = image_with_header("GOLDEN_SUN_A", "AGSE", "01");
        let header = RomHeader::parse(&data).unwrap();
        assert_eq!(header.title, "GOLDEN_SUN_A");
        assert_eq!(header.code, "AGSE");
        assert_eq!(header.maker, "01");
    }

    #[test]
    fn test_short_title_stops_at_nul() {
        let data = image_with_header("METROID4", "AMTE", "01");
        let header = RomHeader::parse(&data).unwrap();
        assert_eq!(header.title, "METROID4");
    }

    #[test]
    fn test_image_too_small_for_header() {
        assert_eq!(RomHeader::parse(&[]), None);
        assert_eq!(RomHeader::parse(&[0u8; 0xB0]), None);
    }
}
