//! Current taint status source.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// Where the running kernel exposes its taint bitmask.
pub const TAINT_STATUS_FILE: &str = "/proc/sys/kernel/tainted";

/// Upper bound on the bytes read from the status file.
const READ_LIMIT: u64 = 64;

/// Failure to obtain the current taint status.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Cannot open input file \"{path}\"")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot read taint status from input file \"{path}\": I/O error")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Input file \"{path}\" contains unparsable data")]
    Unparsable { path: String },
}

/// Read and parse the kernel taint bitmask from `path`.
///
/// At most the first 64 bytes are considered; the content must be a
/// single non-negative decimal integer, optionally newline terminated.
pub fn load_status(path: impl AsRef<Path>) -> Result<u64, StatusError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let file = File::open(path).map_err(|source| StatusError::Open {
        path: display.clone(),
        source,
    })?;

    let mut raw = Vec::new();
    file.take(READ_LIMIT)
        .read_to_end(&mut raw)
        .map_err(|source| StatusError::Read {
            path: display.clone(),
            source,
        })?;

    std::str::from_utf8(&raw)
        .ok()
        .and_then(|text| text.trim().parse::<u64>().ok())
        .ok_or(StatusError::Unparsable { path: display })
}
