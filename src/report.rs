// src/report.rs
use std::fmt;

use tracing::{debug, warn};

use crate::error::{EndianError, Result};
use crate::format::{display_bytes, to_hex};
use crate::reverse::Strategy;

/// Values exercised by the self-test
pub const TEST_VECTORS: [u32; 5] = [
    0x1234_5678,
    0xDEAD_BEEF,
    0x00FF_00FF,
    0x1122_3344,
    0x0000_00FF,
];

/// Result of reversing one value with both strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub original: u32,
    pub reversed: u32,
    pub buffer: u32,
    pub double_reversed: u32,
}

impl Report {
    pub fn new(original: u32) -> Self {
        let reversed = Strategy::Lanes.apply(original);
        let buffer = Strategy::Buffer.apply(original);
        let double_reversed = Strategy::Lanes.apply(reversed);
        Report { original, reversed, buffer, double_reversed }
    }

    pub fn strategies_agree(&self) -> bool {
        self.reversed == self.buffer
    }

    pub fn round_trips(&self) -> bool {
        self.double_reversed == self.original
    }

    pub fn is_consistent(&self) -> bool {
        self.strategies_agree() && self.round_trips()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original:  {} ({})", to_hex(self.original), display_bytes(self.original))?;
        writeln!(f, "Reversed:  {} ({})", to_hex(self.reversed), display_bytes(self.reversed))?;
        writeln!(
            f,
            "Buffer method: {} (match: {})",
            to_hex(self.buffer),
            self.strategies_agree()
        )?;
        write!(
            f,
            "Double reversed: {} (original: {})",
            to_hex(self.double_reversed),
            self.round_trips()
        )
    }
}

/// Run every test vector, failing on the first inconsistent one
pub fn self_test() -> Result<Vec<Report>> {
    run_vectors(&TEST_VECTORS)
}

/// Build reports for `values`, failing on the first inconsistent one
pub fn run_vectors(values: &[u32]) -> Result<Vec<Report>> {
    let mut reports = Vec::with_capacity(values.len());
    for &value in values {
        let report = Report::new(value);
        if !report.is_consistent() {
            warn!(
                "inconsistent reversal for {}: lanes={} buffer={} double={}",
                to_hex(value),
                to_hex(report.reversed),
                to_hex(report.buffer),
                to_hex(report.double_reversed)
            );
            return Err(EndianError::SelfTest { value });
        }
        debug!("{} -> {}", to_hex(value), to_hex(report.reversed));
        reports.push(report);
    }
    Ok(reports)
}
