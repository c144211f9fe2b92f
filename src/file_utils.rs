use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::SubtitleError;

// @module: File and directory utilities

// @const: Suffix appended to the input stem for the default output name
pub const OUTPUT_SUFFIX: &str = "_word_frequency";

// @const: Tabular output extension
pub const OUTPUT_EXTENSION: &str = "csv";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }
        Ok(())
    }

    /// Read a subtitle file, tolerating invalid UTF-8.
    ///
    /// The input must be an existing regular file. The handle is closed before
    /// decoding starts, whether or not the read succeeded.
    pub fn read_subtitle<P: AsRef<Path>>(path: P) -> std::result::Result<String, SubtitleError> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Err(SubtitleError::InputNotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|source| SubtitleError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::decode_lossy(&bytes))
    }

    /// Decode UTF-8, dropping invalid byte sequences and a leading byte-order mark
    pub fn decode_lossy(bytes: &[u8]) -> String {
        let mut decoded = String::with_capacity(bytes.len());
        let mut dropped = 0usize;

        for chunk in bytes.utf8_chunks() {
            decoded.push_str(chunk.valid());
            dropped += chunk.invalid().len();
        }

        if dropped > 0 {
            warn!("Dropped {} undecodable bytes", dropped);
        }

        match decoded.strip_prefix('\u{FEFF}') {
            Some(rest) => rest.to_string(),
            None => decoded,
        }
    }

    // @generates: Default output filename, `<stem>_word_frequency.csv`
    pub fn default_output_name<P: AsRef<Path>>(input_file: P) -> String {
        let stem = input_file.as_ref().file_stem().unwrap_or_default();
        format!("{}{}.{}", stem.to_string_lossy(), OUTPUT_SUFFIX, OUTPUT_EXTENSION)
    }

    /// Resolve where the frequency table is written.
    ///
    /// - no destination: next to the input
    /// - existing directory: inside it
    /// - path ending in `.csv` (any case): used as given
    /// - anything else: treated as a directory to create
    pub fn resolve_output_path<P: AsRef<Path>>(input_file: P, output: Option<&Path>) -> PathBuf {
        let input_file = input_file.as_ref();
        let default_name = Self::default_output_name(input_file);

        let Some(output) = output else {
            return input_file.with_file_name(default_name);
        };

        if Self::dir_exists(output) {
            return output.join(default_name);
        }

        let is_csv = output
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(OUTPUT_EXTENSION));
        if is_csv {
            output.to_path_buf()
        } else {
            output.join(default_name)
        }
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        debug!("Wrote {} bytes to {:?}", content.len(), path.as_ref());
        Ok(())
    }
}
