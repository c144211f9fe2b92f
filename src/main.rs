// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::PathBuf;

use subfreq::app_config::{self, Config};
use subfreq::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for subfreq
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subfreq - word frequencies from subtitle files
///
/// Counts the words of an SRT or ASS subtitle file and writes them
/// to a CSV table sorted by frequency.
#[derive(Parser, Debug)]
#[command(name = "subfreq")]
#[command(version)]
#[command(about = "Compute word frequencies from an SRT or ASS file")]
#[command(long_about = "subfreq extracts the dialogue of a subtitle file and counts its words.

EXAMPLES:
    subfreq movie.srt                     # Writes movie_word_frequency.csv next to the input
    subfreq movie.ass out/                # Writes out/movie_word_frequency.csv
    subfreq movie.srt counts.csv          # Writes counts.csv
    subfreq                               # Pick files with zenity dialogs
    subfreq completions bash > subfreq.bash

FORMATS:
    .ass files are parsed as Advanced SubStation Alpha; every other
    extension is parsed as SubRip (SRT).")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to .srt or .ass file
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Optional output CSV path or output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
//
// Filtering follows log::max_level() so the level can change after init.
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated after loading the config
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "subfreq", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Command line log level wins over the config file
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.into());

    config.validate().context("Configuration validation failed")?;
    debug!("Using configuration: {:?}", config);

    let controller = Controller::with_config(config);

    match cli.input {
        Some(input) => {
            controller.run(&input, cli.output.as_deref())?;
        }
        None => {
            controller.run_interactive()?;
        }
    }

    Ok(())
}
