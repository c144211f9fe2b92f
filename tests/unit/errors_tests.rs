/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;
use subfreq::errors::{AppError, SubtitleError};

#[test]
fn test_subtitleError_inputNotFound_shouldDisplayPath() {
    let error = SubtitleError::InputNotFound(PathBuf::from("missing.srt"));
    let display = format!("{}", error);
    assert!(display.contains("Input file not found"));
    assert!(display.contains("missing.srt"));
}

#[test]
fn test_subtitleError_readFailed_shouldExposeSource() {
    let error = SubtitleError::ReadFailed {
        path: PathBuf::from("locked.ass"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(format!("{}", error).contains("locked.ass"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_appError_fromSubtitleError_shouldWrapCorrectly() {
    let app_error: AppError = SubtitleError::InputNotFound(PathBuf::from("x.srt")).into();
    assert!(format!("{}", app_error).contains("Subtitle error"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhow_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("boom").into();
    assert!(format!("{}", app_error).contains("boom"));
}
