/*!
 * # subfreq - Subtitle Word Frequency
 *
 * A Rust library for counting the words spoken in a subtitle track.
 *
 * ## Features
 *
 * - Read SRT and ASS subtitle files, tolerating invalid UTF-8
 * - Extract only the dialogue text:
 *   - SRT: drop block indexes and timing lines
 *   - ASS: follow the `Format:` header, strip override tags and line-break escapes
 * - Normalize text (bidi marks, case, punctuation) in any script
 * - Export a `word,count` CSV sorted by count, then word
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `formats`: format dispatch and the two dialogue parsers:
 *   - `formats::srt`: line-timed parser
 *   - `formats::ass`: field-delimited parser
 * - `text_utils`: normalization and tokenization
 * - `word_frequency`: frequency table and CSV export
 * - `file_utils`: file system operations and output path resolution
 * - `file_picker`: zenity dialogs for interactive use
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_picker;
pub mod file_utils;
pub mod formats;
pub mod text_utils;
pub mod word_frequency;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, SubtitleError};
pub use formats::{DialogueLine, FormatSchema, SubtitleFormat};
pub use text_utils::{normalize_line, tokenize};
pub use word_frequency::FrequencyTable;
