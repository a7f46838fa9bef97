//! Bitmask decoding into a display-ready report.

use serde::Serialize;

use crate::flag::TaintLevel;
use crate::table::TAINT_FLAGS;

/// Spacer glyph shown for an unset flag without an off mnemonic.
pub const SPACER: char = '.';

/// One cell of the compact symbol row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub ch: char,
    /// `None` for the bare spacer. Set flags carry their own level;
    /// unset flags with an off mnemonic always show at `Info`.
    pub emphasis: Option<TaintLevel>,
}

/// One detail line of a decoded report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub ch: char,
    pub description: &'static str,
    pub value: u64,
    pub set: bool,
    pub emphasis: TaintLevel,
}

/// A decoded taint status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub status: u64,
    /// One cell per table entry, in table order.
    pub symbols: Vec<Symbol>,
    /// Set flags plus unset flags that have a described off state.
    pub details: Vec<Detail>,
}

impl Report {
    /// Whether the status word is zero.
    pub fn is_clean(&self) -> bool {
        self.status == 0
    }

    /// Fixed-width hexadecimal rendering: 16 uppercase digits, zero
    /// padded, no prefix.
    pub fn hex(&self) -> String {
        format!("{:016X}", self.status)
    }
}

/// Decode a raw taint bitmask against the flag table.
///
/// Bits without a table entry are ignored; they still appear in the
/// numeric representation.
pub fn decode(status: u64) -> Report {
    let mut symbols = Vec::with_capacity(TAINT_FLAGS.len());
    let mut details = Vec::new();

    for flag in &TAINT_FLAGS {
        if flag.is_set(status) {
            symbols.push(Symbol {
                ch: flag.on_char,
                emphasis: Some(flag.level),
            });
            details.push(Detail {
                ch: flag.on_char,
                description: flag.on_description,
                value: flag.value(),
                set: true,
                emphasis: flag.level,
            });
        } else if let Some(off_char) = flag.off_char {
            symbols.push(Symbol {
                ch: off_char,
                emphasis: Some(TaintLevel::Info),
            });
            if let Some(description) = flag.off_description {
                details.push(Detail {
                    ch: off_char,
                    description,
                    value: flag.value(),
                    set: false,
                    emphasis: TaintLevel::Info,
                });
            }
        } else {
            symbols.push(Symbol {
                ch: SPACER,
                emphasis: None,
            });
        }
    }

    Report {
        status,
        symbols,
        details,
    }
}
