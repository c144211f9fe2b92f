/*!
 * Common test utilities for the subfreq test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    create_test_file_bytes(dir, filename, content.as_bytes())
}

/// Creates a test file from raw bytes, for encoding tests
pub fn create_test_file_bytes(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Sample SRT document
pub const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:02,000
Hello world!

2
00:00:03,000 --> 00:00:04,500
Hello again.
";

/// Sample ASS document with styles and events sections
pub const SAMPLE_ASS: &str = "[Script Info]
Title: Sample
ScriptType: v4.00+

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour
Style: Default,Arial,20,&H00FFFFFF

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,{\\i1}Hello{\\i0}, world!
Dialogue: 0,0:00:03.00,0:00:04.00,Default,Bob,0,0,0,,Hello\\Nagain.
Comment: 0,0:00:05.00,0:00:06.00,Default,,0,0,0,,not counted
";

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = if filename.to_lowercase().ends_with(".ass") {
        SAMPLE_ASS
    } else {
        SAMPLE_SRT
    };
    create_test_file(dir, filename, content)
}

/// Split CSV output into rows, ignoring the record terminator
pub fn csv_rows(content: &str) -> Vec<String> {
    content.lines().map(|line| line.trim_end_matches('\r').to_string()).collect()
}
