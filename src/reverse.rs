// src/reverse.rs
//! Byte-order reversal of 32-bit words.
//!
//! Two interchangeable strategies are provided: explicit lane extraction
//! with shifts and masks, and reinterpretation through a 4-byte buffer
//! written in one byte order and read back in the other. Both produce the
//! same result for every input.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::parse::parse_number;
use crate::types::{IntoWord32, WORD_BYTES};

/// Reverse the byte order of a 32-bit word.
///
/// Lane 0 moves to position 3, lane 1 to 2, lane 2 to 1 and lane 3 to 0.
/// The function is an involution: `reverse32(reverse32(v)) == v`.
///
/// ```
/// use reverse_endian::reverse32;
///
/// assert_eq!(reverse32(0x12345678), 0x78563412);
/// assert_eq!(reverse32(reverse32(0xDEADBEEF)), 0xDEADBEEF);
/// ```
#[inline]
pub fn reverse32(value: u32) -> u32 {
    let lane0 = (value & 0x0000_00FF) << 24;
    let lane1 = (value & 0x0000_FF00) << 8;
    let lane2 = (value & 0x00FF_0000) >> 8;
    let lane3 = (value & 0xFF00_0000) >> 24;

    lane0 | lane1 | lane2 | lane3
}

/// Reverse the byte order by writing big-endian and reading little-endian
#[inline]
pub fn reverse32_buffer(value: u32) -> u32 {
    let mut buf = [0u8; WORD_BYTES];
    BigEndian::write_u32(&mut buf, value);
    LittleEndian::read_u32(&buf)
}

/// Normalize `value` to its low 32 bits, then reverse it.
///
/// ```
/// use reverse_endian::reverse32_wide;
///
/// // bit 32 is discarded before reversal
/// assert_eq!(reverse32_wide(0x1_0000_00FFu64), 0xFF000000);
/// ```
#[inline]
pub fn reverse32_wide<T: IntoWord32>(value: T) -> u32 {
    reverse32(value.into_word32())
}

/// Reverse a value given as text.
///
/// Accepts decimal or `0x`-prefixed hexadecimal. Returns `None` when the
/// text is not a number.
pub fn try_reverse32(input: &str) -> Option<u32> {
    parse_number(input).ok().map(reverse32)
}

/// Reverse every word of `values` into a new vector
pub fn reverse_all(values: &[u32]) -> Vec<u32> {
    values.iter().copied().map(reverse32).collect()
}

/// Construction strategy for the reversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Shift-and-mask lane extraction
    Lanes,
    /// Byte-order reinterpretation through a raw buffer
    Buffer,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Lanes, Strategy::Buffer];

    pub fn apply(self, value: u32) -> u32 {
        match self {
            Strategy::Lanes => reverse32(value),
            Strategy::Buffer => reverse32_buffer(value),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Lanes => "lanes",
            Strategy::Buffer => "buffer",
        }
    }
}
