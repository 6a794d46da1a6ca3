//! ROM pointer handling.

use std::fmt;

// A ROM pointer is OFFSET | 0x0800_0000; the cartridge space spans banks
// 0x08 and 0x09.
const ROM_BASE: u32 = 0x0800_0000;
const ROM_END: u32 = 0x09FF_FFFF;

/// A 32-bit pointer into the ROM address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GbaPtr(u32);

impl GbaPtr {
    /// The null pointer.
    pub const NULL: GbaPtr = GbaPtr(0);

    pub fn new(raw: u32) -> Self {
        GbaPtr(raw)
    }

    /// Read the little-endian pointer stored at `offset`, if all four of
    /// its bytes are inside the buffer.
    pub fn read(buffer: &[u8], offset: usize) -> Option<Self> {
        let bytes = buffer.get(offset..offset + 4)?;
        Some(GbaPtr(u32::from_le_bytes(bytes.try_into().ok()?)))
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Whether this pointer lands inside the ROM address space.
    pub fn is_valid(self) -> bool {
        (ROM_BASE..=ROM_END).contains(&self.0)
    }

    /// The bank byte of a valid pointer (0x08 or 0x09).
    pub fn bank(self) -> Option<u8> {
        self.is_valid().then(|| (self.0 >> 24) as u8)
    }

    /// The file offset a valid pointer refers to.
    pub fn rom_offset(self) -> Option<usize> {
        self.is_valid().then(|| (self.0 & 0x01FF_FFFF) as usize)
    }
}

impl fmt::Display for GbaPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}
