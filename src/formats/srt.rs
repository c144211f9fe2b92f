use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{DialogueLine, document_lines};

// @module: Line-timed (SRT) dialogue extraction

// @const: SRT timing line regex, anchored at the line start only
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2},\d{3}\s+-->\s+\d{2}:\d{2}:\d{2},\d{3}").unwrap()
});

// @const: Block index regex, decimal digits of any script
static INDEX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

// @checks: Line is a bare block index
//
// A caption consisting only of digits cannot be told apart from an index,
// so it is always dropped. Numerals such as `Ⅻ` or `½` are not digits.
pub fn is_block_index(line: &str) -> bool {
    INDEX_REGEX.is_match(line)
}

// @checks: Line is an `HH:MM:SS,mmm --> HH:MM:SS,mmm` timing range
pub fn is_timing_line(line: &str) -> bool {
    TIMING_REGEX.is_match(line)
}

/// Extract dialogue lines from SRT content.
///
/// Blank, index and timing lines are discarded. Every other line is kept
/// verbatim (after trimming); multi-line captions are not merged.
pub fn parse_srt_string(content: &str) -> Vec<DialogueLine> {
    let mut lines = Vec::new();
    let mut skipped = 0usize;

    for line in document_lines(content) {
        if is_block_index(line) || is_timing_line(line) {
            skipped += 1;
            continue;
        }
        lines.push(line.to_string());
    }

    debug!("SRT: {} dialogue lines, {} index/timing lines skipped", lines.len(), skipped);
    lines
}
