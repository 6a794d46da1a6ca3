//! Fuzzy sweep for the select-song routine and song-table resolution.

use tracing::debug;

use crate::rom::GbaPtr;

use super::pattern::{
    MATCH_TOLERANCE, SCAN_STRIDE, SELECT_SONG_PATTERN, TABLE_POINTER_OFFSET, format_pattern,
    loose_compare,
};

/// Sweep `buffer` for `pattern` at word-aligned offsets, accepting the
/// first window with fewer than `tolerance` mismatching bytes.
///
/// A buffer shorter than the pattern never enters the loop and yields
/// `None`; no window past the end of the buffer is ever evaluated.
pub fn find_pattern(buffer: &[u8], pattern: &[u8], tolerance: usize) -> Option<usize> {
    if pattern.is_empty() {
        return None;
    }

    let mut offset = 0;
    while offset + pattern.len() <= buffer.len() {
        let window = &buffer[offset..offset + pattern.len()];
        if loose_compare(window, pattern, tolerance) < tolerance {
            return Some(offset);
        }
        offset += SCAN_STRIDE;
    }

    None
}

/// Find the file offset of the m4a select-song routine.
pub fn find_select_song(buffer: &[u8]) -> Option<usize> {
    debug!(
        "searching {} bytes for select-song code: {}",
        buffer.len(),
        format_pattern(&SELECT_SONG_PATTERN)
    );
    find_pattern(buffer, &SELECT_SONG_PATTERN, MATCH_TOLERANCE)
}

/// Find the file offset of the song-table pointer.
///
/// The pointer always sits [`TABLE_POINTER_OFFSET`] bytes past the start of
/// the select-song routine; a resolved offset that falls outside the image
/// is treated as not found.
pub fn locate_song_table_pointer(buffer: &[u8]) -> Option<usize> {
    let routine = find_select_song(buffer)?;
    debug!("select-song code at 0x{:X}", routine);

    let pointer = routine + TABLE_POINTER_OFFSET;
    if pointer >= buffer.len() {
        debug!("song-table pointer at 0x{:X} falls outside the image", pointer);
        return None;
    }

    Some(pointer)
}

/// A located song table: where the select-song routine matched, where its
/// table pointer lives, and the pointer's value when it reads as a valid
/// ROM pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongTableLocation {
    /// File offset of the select-song routine.
    pub routine: usize,
    /// File offset of the song-table pointer.
    pub pointer: usize,
    /// The pointer's value, when all four bytes are inside the image and
    /// the value lands in the ROM address space.
    pub table: Option<GbaPtr>,
}

/// Locate the song-table pointer and read its value.
///
/// The accept/reject decision is exactly that of
/// [`locate_song_table_pointer`]; an unreadable or invalid pointer value
/// only leaves [`SongTableLocation::table`] empty.
pub fn locate_song_table(buffer: &[u8]) -> Option<SongTableLocation> {
    let pointer = locate_song_table_pointer(buffer)?;
    let routine = pointer - TABLE_POINTER_OFFSET;

    let table = GbaPtr::read(buffer, pointer).filter(|ptr| ptr.is_valid());
    if let Some(ptr) = table {
        debug!("song table at {}", ptr);
    }

    Some(SongTableLocation {
        routine,
        pointer,
        table,
    })
}
