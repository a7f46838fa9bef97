//! Core taint flag types.

use serde::{Deserialize, Serialize};

/// Severity of a set taint flag.
///
/// Controls display emphasis only; it has no effect on decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaintLevel {
    Info,
    Warn,
    Alert,
}

/// A single kernel taint flag definition.
///
/// `off_char` is `None` for flags whose unset state shows as a bare
/// spacer in the compact row. `off_description` may be absent even when
/// `off_char` is present, meaning the unset state gets no detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaintFlag {
    /// Bit position in the kernel's taint word (0..=63).
    pub shift: u32,
    pub level: TaintLevel,
    pub on_char: char,
    pub off_char: Option<char>,
    pub off_description: Option<&'static str>,
    pub on_description: &'static str,
}

impl TaintFlag {
    /// Numeric value of this flag (`1 << shift`).
    pub const fn value(&self) -> u64 {
        1 << self.shift
    }

    /// Whether this flag is set in `status`.
    pub const fn is_set(&self, status: u64) -> bool {
        status & self.value() == self.value()
    }
}
