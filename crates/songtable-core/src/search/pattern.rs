//! Select-song code signature and fuzzy byte comparison.

/// Thumb code from the start of the m4a engine's song selection routine,
/// shared by every known build of the driver:
///
/// ```text
/// b500    push {lr}
/// 0400    lsls r0, r0, #16
/// 4a07    ldr  r2, [pc, #0x1c]   ; song table
/// 4908    ldr  r1, [pc, #0x20]
/// 0b40    lsrs r0, r0, #13
/// 1840    adds r0, r0, r1
/// 8883    ldrh r3, [r0, #4]
/// 0059    lsls r1, r3, #1
/// 18c9    adds r1, r1, r3
/// 0089    lsls r1, r1, #2
/// 1989    adds r1, r1, r2
/// 680a    ldr  r2, [r1, #0]
/// 6801    ldr  r1, [r0, #0]
/// 1c10    adds r2, r0, #0
/// f000    (varies between builds)
/// ```
///
/// The trailing halfword differs per ROM; the match tolerance absorbs it
/// instead of a wildcard mask.
pub const SELECT_SONG_PATTERN: [u8; 30] = [
    0x00, 0xB5, 0x00, 0x04, 0x07, 0x4A, 0x08, 0x49,
    0x40, 0x0B, 0x40, 0x18, 0x83, 0x88, 0x59, 0x00,
    0xC9, 0x18, 0x89, 0x00, 0x89, 0x18, 0x0A, 0x68,
    0x01, 0x68, 0x10, 0x1C, 0x00, 0xF0,
];

/// Fewer than this many of the pattern's 30 bytes may differ for a window
/// to count as a match. Chosen empirically to absorb per-ROM variation in
/// the routine.
pub const MATCH_TOLERANCE: usize = 8;

/// The routine always starts on a word boundary, so candidate offsets
/// advance four bytes at a time.
pub const SCAN_STRIDE: usize = 4;

/// The song-table pointer sits 40 bytes past the start of the routine.
pub const TABLE_POINTER_OFFSET: usize = 40;

/// Count positions where `window` differs from `pattern`, giving up as soon
/// as the count reaches `tolerance`.
///
/// A `tolerance` of zero returns 0 immediately; since acceptance is a
/// strict `< tolerance` test, that makes every window reject.
pub fn loose_compare(window: &[u8], pattern: &[u8], tolerance: usize) -> usize {
    if tolerance == 0 {
        return 0;
    }

    let mut mismatches = 0;
    for (a, b) in window.iter().zip(pattern) {
        if a != b {
            mismatches += 1;
            if mismatches >= tolerance {
                return mismatches;
            }
        }
    }

    mismatches
}

/// Format a byte pattern for display (e.g. "00 B5 00 04")
pub fn format_pattern(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
