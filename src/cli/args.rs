//! CLI argument definitions for `elective-advisor`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use elective_advisor::config::ConfigOverrides;
use elective_advisor::logger::Level;
use elective_advisor::validation::MAX_EXPECTED_RECORDS;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `response_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Parse AI recommendation text into records.
    ///
    /// Reads the `**Key:** value` template from FILE (or stdin with `-`).
    Parse {
        /// Response text file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output format: json, markdown (md), or html
        #[arg(short, long, value_name = "FORMAT", default_value = "json")]
        format: String,

        /// Write the output to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Expect Numbers 1..=N and warn about any that are missing
        #[arg(
            long,
            value_name = "N",
            value_parser = clap::value_parser!(i64).range(1..=MAX_EXPECTED_RECORDS)
        )]
        expect: Option<i64>,

        /// Fields every record must carry; fails when any record lacks one
        #[arg(long = "require", value_name = "KEY", num_args = 1..)]
        require: Vec<String>,
    },
    /// Produce recommendations for a job and degree.
    ///
    /// Replays the canned response unless a live backend is enabled.
    Recommend {
        /// Target job title (e.g., "Web Developer")
        #[arg(long = "job", value_name = "NAME")]
        job: String,

        /// Degree or program name
        #[arg(long = "degree", value_name = "NAME")]
        degree: String,

        /// Job identifier recorded in logs
        #[arg(long = "job-id", value_name = "ID", default_value_t = 0)]
        job_id: i64,

        /// Degree electives CSV; recommendations are checked against it
        #[arg(long = "electives", value_name = "CSV")]
        electives: Option<PathBuf>,

        /// Output format: markdown (md), html, or json
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,

        /// Output file path (defaults to `reports_dir` with the format extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the electives in a degree CSV as JSON.
    Electives {
        /// Degree electives CSV
        #[arg(value_name = "CSV")]
        input: PathBuf,
    },
    /// Print the prompt that would be sent to a text-generation backend.
    Prompt {
        /// Target job title
        #[arg(long = "job", value_name = "NAME")]
        job: String,

        /// Degree or program name
        #[arg(long = "degree", value_name = "NAME")]
        degree: String,

        /// Degree electives CSV
        #[arg(long = "electives", value_name = "CSV")]
        electives: PathBuf,

        /// Number of recommendations to ask for (defaults to config `expected_count`)
        #[arg(long, value_name = "N", value_parser = parse_count)]
        count: Option<usize>,
    },
}

/// Parse a recommendation count between 1 and `MAX_EXPECTED_RECORDS`
fn parse_count(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .ok()
        .filter(|count| {
            i64::try_from(*count).is_ok_and(|n| (1..=MAX_EXPECTED_RECORDS).contains(&n))
        })
        .ok_or_else(|| format!("expected an integer from 1 to {MAX_EXPECTED_RECORDS}"))
}

#[derive(Parser, Debug)]
#[command(
    name = "elective-advisor",
    about = "Smart elective advisor command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config live backend switch (true/false)
    #[arg(long = "ai-enabled", value_parser = BoolishValueParser::new())]
    pub ai_enabled: Option<bool>,

    /// Override config canned response file
    #[arg(long = "response-file", value_name = "PATH")]
    pub response_file: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_to_string(path: &PathBuf) -> String {
    path.to_string_lossy().to_string()
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override. `--reports-dir` wins over
    /// `--config-reports-dir` when both are given.
    ///
    /// ```ignore
    /// let args = Cli::parse();
    /// config.apply_overrides(&args.to_config_overrides());
    /// ```
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_to_string),
            verbose: self.config_verbose,
            ai_enabled: self.ai_enabled,
            response_file: self.response_file.as_ref().map(path_to_string),
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(path_to_string),
        }
    }
}
