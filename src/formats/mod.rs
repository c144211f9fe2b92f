/*!
 * Subtitle format detection and dialogue extraction.
 *
 * Two line-oriented formats are supported:
 * - `srt`: line-timed blocks of index, timing and text lines
 * - `ass`: header and dialogue directives with comma-separated fields
 *
 * The format is chosen from the file extension alone. `.ass` (any case)
 * selects the field-delimited parser; everything else falls back to SRT.
 */

use std::fmt;
use std::path::Path;

pub mod ass;
pub mod srt;

pub use ass::{FormatSchema, parse_ass_string};
pub use srt::parse_srt_string;

/// One extracted unit of spoken text, before normalization
pub type DialogueLine = String;

/// Supported subtitle formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubtitleFormat {
    /// Index / timing / text blocks (SubRip)
    #[default]
    Srt,
    /// Format / Dialogue directives (Advanced SubStation Alpha)
    Ass,
}

impl SubtitleFormat {
    /// Select the parser for a path based on its extension.
    ///
    /// Unknown or missing extensions are not an error; they map to [`SubtitleFormat::Srt`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension() {
            Some(ext) if ext.to_string_lossy().eq_ignore_ascii_case("ass") => Self::Ass,
            _ => Self::Srt,
        }
    }

    /// Extract the dialogue lines of a decoded document
    pub fn extract_dialogue(self, content: &str) -> Vec<DialogueLine> {
        match self {
            Self::Srt => parse_srt_string(content),
            Self::Ass => parse_ass_string(content),
        }
    }

    /// Human-readable format name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Srt => "SubRip (SRT)",
            Self::Ass => "Advanced SubStation Alpha (ASS)",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Iterate over the trimmed, non-empty lines of a document.
///
/// `\n`, `\r\n` and a bare `\r` all end a line. Splitting `\r\n` on both
/// characters only adds an empty line, which is skipped here anyway.
pub(crate) fn document_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(|c: char| c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}
