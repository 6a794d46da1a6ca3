//! # songtable-core
//!
//! Core library for the songtable ROM scanner.
//!
//! This crate provides:
//! - Fuzzy matching for the m4a engine's select-song code signature
//! - Song-table pointer resolution with bounds checking
//! - ROM image loading and cartridge header parsing
//! - Serializable scan reports for batch tooling

pub mod error;
pub mod report;
pub mod rom;
pub mod search;

pub use error::{Error, Result};
pub use report::ScanReport;
pub use rom::{GbaPtr, RomHeader, RomImage};
pub use search::{
    MATCH_TOLERANCE, SCAN_STRIDE, SELECT_SONG_PATTERN, SongTableLocation, TABLE_POINTER_OFFSET,
    find_pattern, find_select_song, format_pattern, locate_song_table, locate_song_table_pointer,
    loose_compare,
};
