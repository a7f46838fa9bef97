//! taint-flags: Kernel taint flag models, decoding, and query.
//!
//! Decodes the kernel's taint bitmask (`/proc/sys/kernel/tainted`)
//! against a fixed table of 18 known flags into a display-ready
//! report. Also supports enumerating the full table and decoding an
//! arbitrary flag letter combination without reading the running
//! system.
//!
//! # Mnemonics
//!
//! Each flag has a single-letter on mnemonic (`P` proprietary module
//! loaded, `F` module force loaded, ...). Bit 0 additionally has an
//! off mnemonic, `G` (only GPL modules). Unset flags without an off
//! mnemonic show as `.` in the compact row.

pub mod flag;
pub mod parse;
pub mod render;
pub mod report;
pub mod status;
pub mod table;

pub use flag::*;
pub use parse::*;
pub use report::*;
pub use status::*;
pub use table::*;
