// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndianError {
    #[error("empty input: expected a hexadecimal value such as 0x12345678")]
    Empty,

    #[error("invalid hex literal '{input}': no digits after the 0x prefix")]
    MissingDigits { input: String },

    #[error("invalid hex literal '{input}': unexpected character '{digit}' at position {position}")]
    InvalidDigit { input: String, digit: char, position: usize },

    #[error("invalid number '{input}': unexpected character '{digit}' at position {position}")]
    InvalidDecimal { input: String, digit: char, position: usize },

    #[error("self-test failed for {value:#010X}: strategies disagree or the value does not round-trip")]
    SelfTest { value: u32 },
}

pub type Result<T> = std::result::Result<T, EndianError>;
