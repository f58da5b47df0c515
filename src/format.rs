// src/format.rs
use crate::types::Word32;

/// `0x` followed by exactly 8 uppercase hex digits
pub fn to_hex(value: u32) -> String {
    format!("0x{value:08X}")
}

/// The four bytes, most significant first, as space separated hex pairs
pub fn display_bytes(value: u32) -> String {
    let lanes = Word32(value).lanes();
    lanes
        .iter()
        .rev()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(0x12345678), "0x12345678");
        assert_eq!(to_hex(0xdeadbeef), "0xDEADBEEF");
        assert_eq!(to_hex(0xFF), "0x000000FF");
        assert_eq!(to_hex(0), "0x00000000");
    }

    #[test]
    fn test_display_bytes() {
        assert_eq!(display_bytes(0x12345678), "12 34 56 78");
        assert_eq!(display_bytes(0xFF), "00 00 00 FF");
        assert_eq!(display_bytes(0xDEADBEEF), "DE AD BE EF");
    }
}
