// src/parse.rs
use tracing::{debug, trace};

use crate::error::{EndianError, Result};

/// Max number of hex digits that fit in a word
const MAX_HEX_DIGITS: usize = 8;

fn strip_hex_prefix(input: &str) -> Option<&str> {
    input.strip_prefix("0x").or_else(|| input.strip_prefix("0X"))
}

/// Parse a hexadecimal literal, with or without a `0x` prefix.
///
/// Surrounding whitespace is ignored. Literals longer than 8 digits keep
/// only their low 32 bits.
///
/// ```
/// use reverse_endian::parse_hex;
///
/// assert_eq!(parse_hex("0x12345678").unwrap(), 0x12345678);
/// assert_eq!(parse_hex("deadbeef").unwrap(), 0xDEADBEEF);
/// assert!(parse_hex("0xZZ").is_err());
/// ```
pub fn parse_hex(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EndianError::Empty);
    }

    let (digits, offset) = match strip_hex_prefix(trimmed) {
        Some(rest) => (rest, 2),
        None => (trimmed, 0),
    };
    if digits.is_empty() {
        return Err(EndianError::MissingDigits { input: trimmed.to_string() });
    }

    let mut value = 0u32;
    let mut count = 0usize;
    for (i, c) in digits.chars().enumerate() {
        let Some(d) = c.to_digit(16) else {
            return Err(EndianError::InvalidDigit {
                input: trimmed.to_string(),
                digit: c,
                position: offset + i,
            });
        };
        // shifting out the top nibble keeps the low 32 bits
        value = (value << 4) | d;
        count += 1;
    }

    if count > MAX_HEX_DIGITS {
        debug!("hex literal '{trimmed}' has {count} digits, truncated to {value:#010X}");
    }
    trace!("parsed hex '{trimmed}' as {value:#010X}");
    Ok(value)
}

/// Parse a decimal or `0x`-prefixed hexadecimal number.
///
/// Decimal input may carry a leading `-`; values are reduced modulo 2^32,
/// negative ones in two's complement.
pub fn parse_number(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EndianError::Empty);
    }
    if strip_hex_prefix(trimmed).is_some() {
        return parse_hex(trimmed);
    }

    let (negative, digits, offset) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest, 1),
        None => (false, trimmed, 0),
    };
    if digits.is_empty() {
        return Err(EndianError::InvalidDecimal {
            input: trimmed.to_string(),
            digit: '-',
            position: 0,
        });
    }

    let mut value = 0u32;
    for (i, c) in digits.chars().enumerate() {
        let Some(d) = c.to_digit(10) else {
            return Err(EndianError::InvalidDecimal {
                input: trimmed.to_string(),
                digit: c,
                position: offset + i,
            });
        };
        value = value.wrapping_mul(10).wrapping_add(d);
    }

    Ok(if negative { value.wrapping_neg() } else { value })
}
