//! Byte counts turned into display values.
//!
//! [`format_size`] picks a 1024-based magnitude tier out of [`SUFFIXES`];
//! the [`Display`](fmt::Display) impl of [`SizeResult`] owns the textual
//! layout shared by every size line (one decimal, right-aligned to 12).

use std::fmt;

/// Magnitude tiers, each 1024x the previous one.
pub const SUFFIXES: [char; 5] = ['B', 'K', 'M', 'G', 'T'];

const STEP: f64 = 1024.0;

/// Minimum width of the numeric column in size lines.
pub const SIZE_WIDTH: usize = 12;

/// A byte count ready for printing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeResult {
    pub value: f64,
    pub suffix: char,
}

/// Converts `bytes` into a [`SizeResult`].
///
/// Without suffixes the value is always expressed in bytes. With suffixes
/// the value is divided by 1024 until it drops below 1024 or the last tier
/// (`T`) is reached; values past that tier stay in `T`.
///
/// ```text
/// format_size(2048, false) -> 2048.0 B
/// format_size(2048, true)  ->    2.0 K
/// format_size(500, true)   ->  500.0 B
/// ```
pub fn format_size(bytes: u64, use_suffixes: bool) -> SizeResult {
    let mut value = bytes as f64;
    if !use_suffixes {
        return SizeResult { value, suffix: 'B' };
    }

    let mut tier = 0;
    while value >= STEP && tier + 1 < SUFFIXES.len() {
        value /= STEP;
        tier += 1;
    }

    SizeResult {
        value,
        suffix: SUFFIXES[tier],
    }
}

impl fmt::Display for SizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>width$.1}{}",
            self.value,
            self.suffix,
            width = SIZE_WIDTH
        )
    }
}
