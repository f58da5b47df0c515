// src/types.rs
use std::fmt;

/// Number of bytes (lanes) in a word
pub const WORD_BYTES: usize = 4;

/// A 32-bit unsigned word viewed as four 8-bit lanes.
///
/// Lane 0 is the least significant byte, lane 3 the most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Word32(pub u32);

impl Word32 {
    pub const MIN: Word32 = Word32(u32::MIN);
    pub const MAX: Word32 = Word32(u32::MAX);

    /// Normalize any primitive integer to a word, keeping its low 32 bits
    pub fn new<T: IntoWord32>(value: T) -> Self {
        Word32(value.into_word32())
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Get a single lane, `index` in `0..4`
    pub fn lane(self, index: usize) -> Option<u8> {
        if index < WORD_BYTES {
            Some((self.0 >> (index * 8)) as u8)
        } else {
            None
        }
    }

    /// All four lanes, least significant first
    pub fn lanes(self) -> [u8; WORD_BYTES] {
        [
            self.0 as u8,
            (self.0 >> 8) as u8,
            (self.0 >> 16) as u8,
            (self.0 >> 24) as u8,
        ]
    }

    /// Rebuild a word from lanes given least significant first
    pub fn from_lanes(lanes: [u8; WORD_BYTES]) -> Self {
        Word32(
            (lanes[0] as u32)
                | ((lanes[1] as u32) << 8)
                | ((lanes[2] as u32) << 16)
                | ((lanes[3] as u32) << 24),
        )
    }

    /// Byte-reversed copy of this word
    pub fn reversed(self) -> Self {
        Word32(crate::reverse::reverse32(self.0))
    }
}

impl From<u32> for Word32 {
    fn from(value: u32) -> Self {
        Word32(value)
    }
}

impl From<Word32> for u32 {
    fn from(word: Word32) -> Self {
        word.0
    }
}

impl fmt::Display for Word32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::to_hex(self.0))
    }
}

/// Truncating conversion to an unsigned 32-bit value.
///
/// Higher-order bits are discarded; signed values are taken in two's
/// complement, so `-1i64` becomes `0xFFFFFFFF`.
pub trait IntoWord32: Copy {
    fn into_word32(self) -> u32;
}

macro_rules! impl_into_word32 {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoWord32 for $t {
                #[inline]
                fn into_word32(self) -> u32 {
                    self as u32
                }
            }
        )*
    };
}

impl_into_word32!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl IntoWord32 for Word32 {
    #[inline]
    fn into_word32(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes_are_least_significant_first() {
        let word = Word32(0x12345678);
        assert_eq!(word.lanes(), [0x78, 0x56, 0x34, 0x12]);
        assert_eq!(word.lane(0), Some(0x78));
        assert_eq!(word.lane(3), Some(0x12));
        assert_eq!(word.lane(4), None);
    }

    #[test]
    fn test_from_lanes_inverts_lanes() {
        for value in [0u32, 1, 0xFF, 0xFF000000, 0xDEADBEEF, u32::MAX] {
            assert_eq!(Word32::from_lanes(Word32(value).lanes()), Word32(value));
        }
    }

    #[test]
    fn test_truncating_conversions() {
        assert_eq!(0x1_0000_00FFu64.into_word32(), 0xFF);
        assert_eq!((-1i32).into_word32(), u32::MAX);
        assert_eq!((-1i64).into_word32(), u32::MAX);
        assert_eq!(0xABu8.into_word32(), 0xAB);
        assert_eq!(Word32::new(0xFFFF_FFFF_1234_5678u64), Word32(0x12345678));
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Word32(0xDEADBEEF).to_string(), "0xDEADBEEF");
        assert_eq!(Word32::MIN.to_string(), "0x00000000");
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Word32(0x12345678).reversed(), Word32(0x78563412));
    }
}
