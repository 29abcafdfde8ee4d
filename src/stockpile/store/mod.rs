//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence gateway: it loads the whole
//! inventory once at startup and rewrites it in full after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a single delimited text file
//!   (`inventory_data.txt` by default), one [`codec`](crate::codec) line per record.
//! - [`memory::InMemoryStore`]: Keeps the encoded text in memory for tests,
//!   and can be told to fail writes.
//!
//! ## Loading is advisory
//!
//! A missing file is the first-run case and yields an empty [`LoadReport`].
//! Lines that fail to decode are collected in [`LoadReport::skipped`] and the
//! remaining lines still load: a partly corrupt file gives a partly populated
//! inventory, never a failure. That includes lines that are not valid UTF-8.
//!
//! ## Storage Format
//!
//! ```text
//! .stockpile/
//! ├── inventory_data.txt   # One record per line, no header
//! └── config.json          # StockConfig
//! ```

use crate::codec::{self, DecodeError};
use crate::error::Result;
use crate::model::Record;
use std::path::Path;

pub mod fs;
pub mod memory;

/// A persisted line that could not be decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line_no: usize,
    pub reason: DecodeError,
}

/// Outcome of a load: the records that decoded, in file order, plus what was skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedLine>,
    /// No backing file existed yet.
    pub first_run: bool,
}

/// Abstract interface for inventory persistence.
pub trait DataStore {
    /// Load every record. A missing backing file is not an error.
    fn load(&self) -> Result<LoadReport>;

    /// Replace the persisted contents with `records`, in order.
    fn save_all(&mut self, records: &[Record]) -> Result<()>;

    /// Where the data lives, for stores that have a location.
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// Decode a whole persisted document. Blank lines are ignored.
pub fn decode_lines(text: &str) -> LoadReport {
    decode_bytes(text.as_bytes())
}

/// Decode raw file contents line by line. A line that is not UTF-8 is
/// skipped like any other undecodable line.
pub fn decode_bytes(bytes: &[u8]) -> LoadReport {
    let mut report = LoadReport::default();
    for (idx, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(_) => {
                report.skipped.push(SkippedLine {
                    line_no: idx + 1,
                    reason: DecodeError::InvalidUtf8,
                });
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match codec::decode(line) {
            Ok(record) => report.records.push(record),
            Err(reason) => report.skipped.push(SkippedLine {
                line_no: idx + 1,
                reason,
            }),
        }
    }
    report
}

/// Encode records into the persisted document, one newline-terminated line each.
pub fn encode_lines(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&codec::encode(record));
        out.push('\n');
    }
    out
}
