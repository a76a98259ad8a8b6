//! Advisory PID file reading.
//!
//! The daemon writes `<home>/run/nifi.pid` itself; this controller only
//! ever reads it, and never treats the content as authoritative without
//! a liveness check.
//!
//! Format: single-line integer.

use std::fs;
use std::io;
use std::path::Path;

/// Read and parse the PID file.
///
/// A missing file and unparseable content are both errors; callers fall
/// back to the process-table scan in either case.
pub fn read_pidfile(path: &Path) -> io::Result<u32> {
    let content = fs::read_to_string(path)?;
    parse_pidfile_content(&content)
}

fn parse_pidfile_content(content: &str) -> io::Result<u32> {
    content
        .trim()
        .parse::<u32>()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "missing or invalid PID"))
}
