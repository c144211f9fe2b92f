/*!
 * Word frequency accumulation and export.
 *
 * A `FrequencyTable` maps each normalized word to the number of times it
 * was seen. Counting is order-independent; export is deterministic:
 * count descending, then word ascending by code point.
 */

use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use crate::text_utils::{normalize_line, tokenize};

// @const: CSV header row
pub const CSV_HEADER: [&str; 2] = ["word", "count"];

/// Mapping from word to occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from raw dialogue lines, normalizing each one
    pub fn from_dialogue<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for line in lines {
            table.add_normalized_line(&normalize_line(line.as_ref()));
        }
        table
    }

    /// Count every whitespace-delimited token of an already normalized line
    pub fn add_normalized_line(&mut self, normalized: &str) {
        for word in tokenize(normalized) {
            self.add_word(word);
        }
    }

    // @increments: Count for one token
    fn add_word(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Count for a word, 0 if never seen
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of tokens counted; always the sum of all counts
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries in export order: count descending, then word ascending
    pub fn sorted_entries(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| Self::export_order(a, b));
        entries
    }

    fn export_order(a: &(&str, usize), b: &(&str, usize)) -> Ordering {
        b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
    }

    /// Write the table as CSV: a `word,count` header, then rows in export order.
    ///
    /// Records end in `\r\n`.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(out);

        writer
            .write_record(CSV_HEADER)
            .context("Failed to write CSV header")?;
        for (word, count) in self.sorted_entries() {
            writer
                .serialize((word, count))
                .with_context(|| format!("Failed to write CSV row for {:?}", word))?;
        }
        writer.flush().context("Failed to flush CSV output")?;
        Ok(())
    }

    /// Render the table as a CSV string
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).context("CSV output is not valid UTF-8")
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} distinct words, {} total", self.len(), self.total())
    }
}
