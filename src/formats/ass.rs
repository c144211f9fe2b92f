use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{DialogueLine, document_lines};

// @module: Field-delimited (ASS) dialogue extraction

// @const: Header directive prefix
const FORMAT_PREFIX: &str = "Format:";

// @const: Dialogue directive prefix
const DIALOGUE_PREFIX: &str = "Dialogue:";

// @const: Field count of the standard [Events] layout, Text last
pub const DEFAULT_FIELD_COUNT: usize = 10;

// @const: Override tag regex ({\pos(1,2)}, {\i1}, ...), shortest match
static OVERRIDE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{.*?\}").unwrap());

// @const: Escape sequences rendered as a space
const LINE_BREAK_ESCAPES: [&str; 3] = ["\\N", "\\n", "\\h"];

/// Column layout declared by the most recent `Format:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSchema {
    /// Number of comma-separated fields in a dialogue payload
    pub field_count: usize,

    /// Zero-based position of the `Text` field, if declared
    pub text_index: Option<usize>,
}

impl Default for FormatSchema {
    fn default() -> Self {
        Self {
            field_count: DEFAULT_FIELD_COUNT,
            text_index: None,
        }
    }
}

impl FormatSchema {
    /// Build a schema from the part of a header line after `Format:`
    pub fn from_header(fields: &str) -> Self {
        let names: Vec<&str> = fields.split(',').map(str::trim).collect();
        Self {
            field_count: names.len(),
            text_index: names.iter().position(|name| *name == "Text"),
        }
    }

    /// Pick the text field out of a dialogue payload.
    ///
    /// The payload is split into at most `field_count` parts so commas inside
    /// the final field survive. Falls back to the last part when the text
    /// position is unknown or out of range.
    pub fn select_text<'a>(&self, payload: &'a str) -> &'a str {
        let parts: Vec<&str> = payload.splitn(self.field_count.max(1), ',').collect();
        match self.text_index {
            Some(index) if index < parts.len() => parts[index],
            _ => parts.last().copied().unwrap_or_default(),
        }
    }
}

/// Remove override tags, then turn `\N`, `\n` and `\h` into spaces
pub fn strip_markup(text: &str) -> String {
    let mut cleaned = OVERRIDE_TAG_REGEX.replace_all(text, "").into_owned();
    for escape in LINE_BREAK_ESCAPES {
        cleaned = cleaned.replace(escape, " ");
    }
    cleaned
}

/// Extract dialogue lines from ASS content.
///
/// Each `Format:` line replaces the current schema; each `Dialogue:` line
/// yields exactly one entry. Anything else is ignored.
pub fn parse_ass_string(content: &str) -> Vec<DialogueLine> {
    let mut lines = Vec::new();
    let mut schema = FormatSchema::default();

    for line in document_lines(content) {
        if let Some(fields) = line.strip_prefix(FORMAT_PREFIX) {
            schema = FormatSchema::from_header(fields);
            debug!(
                "ASS: schema with {} fields, text at {:?}",
                schema.field_count, schema.text_index
            );
        } else if let Some(payload) = line.strip_prefix(DIALOGUE_PREFIX) {
            let text = schema.select_text(payload.trim_start());
            trace!("ASS: dialogue text {:?}", text);
            lines.push(strip_markup(text));
        }
    }

    debug!("ASS: {} dialogue lines", lines.len());
    lines
}
