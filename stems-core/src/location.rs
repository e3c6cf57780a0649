//! Extraction of file id and line range from packed location strings.
//!
//! A location looks like `<file-id>,<start-line>:<start-col>,<end-line>:<end-col>`
//! and may carry trailing characters. Only the file id and the two line
//! numbers are kept; columns are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9_],(\d+):\d+,(\d+):\d+").expect("line range pattern is valid")
});

/// Inclusive line range of a module definition.
///
/// `(0, 0)` means the range could not be recovered, not "line zero".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRange {
    pub start: u64,
    pub end: u64,
}

impl LineRange {
    pub const UNKNOWN: LineRange = LineRange { start: 0, end: 0 };

    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub file_id: &'a str,
    pub lines: LineRange,
}

pub fn parse_location(loc: &str) -> Location<'_> {
    Location {
        file_id: file_id(loc),
        lines: line_range(loc),
    }
}

/// Everything before the first comma, or the whole string if there is none.
pub fn file_id(loc: &str) -> &str {
    loc.split(',').next().unwrap_or(loc)
}

pub fn line_range(loc: &str) -> LineRange {
    let Some(caps) = LINE_RANGE.captures(loc) else {
        return LineRange::UNKNOWN;
    };
    match (caps[1].parse::<u64>(), caps[2].parse::<u64>()) {
        (Ok(start), Ok(end)) => LineRange::new(start, end),
        _ => LineRange::UNKNOWN,
    }
}
