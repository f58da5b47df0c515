// src/lib.rs
//! # reverse-endian
//!
//! Convert 32-bit unsigned integers between big-endian and little-endian byte
//! order, and render them as hex and as individual bytes.
//!
//! ## Features
//!
//! - 🔁 **Involution**: reversing twice always gives back the original value
//! - ⚖️ **Two Strategies**: shift-and-mask lanes, or a buffer written big-endian and read little-endian
//! - ✂️ **Normalizing**: wider integers are truncated to their low 32 bits
//! - 🧾 **Fallible Parsing**: hex and decimal text is checked at the boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use reverse_endian::*;
//!
//! fn main() -> Result<()> {
//!     let value = parse_hex("0x12345678")?;
//!     let reversed = reverse32(value);
//!
//!     assert_eq!(to_hex(reversed), "0x78563412");
//!     assert_eq!(display_bytes(reversed), "78 56 34 12");
//!     assert_eq!(reverse32_buffer(value), reversed);
//!     Ok(())
//! }
//! ```
//!
//! ### Untyped input
//!
//! ```rust
//! use reverse_endian::try_reverse32;
//!
//! assert_eq!(try_reverse32("255"), Some(0xFF000000));
//! assert_eq!(try_reverse32("not a number"), None);
//! ```

// Modules
pub mod error;
pub mod types;
pub mod reverse;
pub mod format;
pub mod parse;
pub mod report;

// Re-export commonly used items at the crate root for convenience
pub use error::{EndianError, Result};

pub use types::{
    IntoWord32,
    Word32,
    WORD_BYTES,
};

pub use reverse::{
    reverse32,
    reverse32_buffer,
    reverse32_wide,
    reverse_all,
    try_reverse32,
    Strategy,
};

pub use format::{display_bytes, to_hex};

pub use parse::{parse_hex, parse_number};

pub use report::{
    run_vectors,
    self_test,
    Report,
    TEST_VECTORS,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use reverse_endian::prelude::*;
    //! ```

    pub use crate::error::{EndianError, Result};
    pub use crate::format::{display_bytes, to_hex};
    pub use crate::parse::parse_hex;
    pub use crate::reverse::{reverse32, reverse32_buffer, Strategy};
    pub use crate::types::Word32;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
