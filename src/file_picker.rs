/*!
 * Interactive file selection through zenity dialogs.
 *
 * Used when the program is started without an input path. Every dialog
 * returns `None` when the user cancels or when zenity cannot be run.
 */

use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

// @const: Dialog executable
const ZENITY: &str = "zenity";

// @struct: GNOME dialog wrapper
pub struct FilePicker;

impl FilePicker {
    // @checks: zenity can be launched
    pub fn is_available() -> bool {
        Command::new(ZENITY)
            .arg("--version")
            .output()
            .is_ok_and(|output| output.status.success())
    }

    /// Ask for a subtitle file
    pub fn pick_subtitle_file() -> Option<PathBuf> {
        Self::run_selection(&[
            "--file-selection",
            "--title=Select subtitle file",
            "--file-filter=*.srt *.ass",
        ])
        .map(PathBuf::from)
    }

    /// Ask for an output directory, starting in `initial_dir`
    pub fn pick_output_dir(initial_dir: &Path) -> Option<PathBuf> {
        let start = format!("--filename={}/", initial_dir.display());
        Self::run_selection(&[
            "--file-selection",
            "--directory",
            "--title=Select output folder",
            &start,
        ])
        .map(PathBuf::from)
    }

    /// Show an informational message; failures are ignored
    pub fn show_info(message: &str) {
        let text = format!("--text={}", message);
        if let Err(e) = Command::new(ZENITY).args(["--info", &text]).output() {
            debug!("zenity info dialog failed: {}", e);
        }
    }

    // @returns: Trimmed stdout of a successful dialog, None on cancel or error
    fn run_selection(args: &[&str]) -> Option<String> {
        let output = match Command::new(ZENITY).args(args).output() {
            Ok(output) => output,
            Err(e) => {
                debug!("Failed to launch zenity: {}", e);
                return None;
            }
        };

        if !output.status.success() {
            return None;
        }

        let selection = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if selection.is_empty() { None } else { Some(selection) }
    }
}
