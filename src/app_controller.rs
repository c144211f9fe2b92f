use anyhow::{Result, anyhow};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::SubtitleError;
use crate::file_picker::FilePicker;
use crate::file_utils::FileManager;
use crate::formats::SubtitleFormat;
use crate::word_frequency::FrequencyTable;

// @module: Application controller for word frequency extraction

/// Main application controller: subtitle file in, CSV table out
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Parse a subtitle file and count its words.
    ///
    /// Fails only when the input is missing or unreadable; malformed lines
    /// are skipped by the parsers.
    pub fn count_words<P: AsRef<Path>>(&self, input_file: P) -> std::result::Result<FrequencyTable, SubtitleError> {
        let input_file = input_file.as_ref();
        let content = FileManager::read_subtitle(input_file)?;

        let format = SubtitleFormat::from_path(input_file);
        debug!("Parsing {:?} as {}", input_file, format);

        let dialogue = format.extract_dialogue(&content);
        Ok(FrequencyTable::from_dialogue(&dialogue))
    }

    /// Run the full pipeline and return the written CSV path.
    ///
    /// `output` may be a directory or a `.csv` file; when omitted the
    /// configured `output_dir` is used, then the input's directory.
    pub fn run(&self, input_file: &Path, output: Option<&Path>) -> Result<PathBuf> {
        // Check before any parsing so nothing is written on failure
        if !FileManager::file_exists(input_file) {
            return Err(SubtitleError::InputNotFound(input_file.to_path_buf()).into());
        }

        let destination = output.or(self.config.output_dir.as_deref());
        let output_path = FileManager::resolve_output_path(input_file, destination);

        info!("Counting words in {:?}", input_file);
        let table = self.count_words(input_file)?;

        if table.is_empty() {
            warn!("No words found in {:?}", input_file);
        }
        info!("{}", table);

        FileManager::write_to_file(&output_path, &table.to_csv_string()?)?;
        info!("Saved: {:?}", output_path);

        Ok(output_path)
    }

    /// Pick input and output through dialogs, then run.
    ///
    /// Returns `Ok(None)` when the file dialog is cancelled.
    pub fn run_interactive(&self) -> Result<Option<PathBuf>> {
        if !FilePicker::is_available() {
            return Err(anyhow!(
                "No INPUT given and zenity is not available for file selection"
            ));
        }

        let Some(input_file) = FilePicker::pick_subtitle_file() else {
            info!("No subtitle file selected");
            return Ok(None);
        };

        let input_dir = input_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let output_dir = FilePicker::pick_output_dir(&input_dir).unwrap_or(input_dir);

        let output_path = self.run(&input_file, Some(&output_dir))?;
        FilePicker::show_info(&format!("Saved: {}", output_path.display()));

        Ok(Some(output_path))
    }
}
