//! Configuration module for the elective advisor

use crate::core::advisor::parse_bool_token;
use crate::core::prompt::DEFAULT_RECOMMENDATION_COUNT;
use crate::core::validation::MAX_EXPECTED_RECORDS;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the application config directory
const APP_DIR_VARIABLE: &str = "$ELECTIVE_ADVISOR";

/// Environment variable that switches the live generation backend on or off
pub const AI_ENABLED_ENV: &str = "ELECTIVE_ADVISOR_AI_ENABLED";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Recommendation source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Ask a live text-generation backend instead of replaying a canned response
    #[serde(default)]
    pub ai_enabled: bool,
    /// Canned response file; empty means search the default locations
    #[serde(default)]
    pub response_file: String,
    /// Number of recommendations requested and expected back
    #[serde(default)]
    pub expected_count: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            ai_enabled: false,
            response_file: String::new(),
            expected_count: DEFAULT_RECOMMENDATION_COUNT,
        }
    }
}

impl AdvisorConfig {
    /// `expected_count` capped at [`MAX_EXPECTED_RECORDS`]; zero takes the default
    #[must_use]
    pub fn recommendation_count(&self) -> usize {
        let limit = usize::try_from(MAX_EXPECTED_RECORDS).unwrap_or(usize::MAX);
        match self.expected_count {
            0 => DEFAULT_RECOMMENDATION_COUNT,
            count => count.min(limit),
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Recommendation source settings
    #[serde(default)]
    pub advisor: AdvisorConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override live backend switch
    pub ai_enabled: Option<bool>,
    /// Override canned response file
    pub response_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$ELECTIVE_ADVISOR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/elective-advisor`
    /// - macOS: `~/Library/Application Support/elective-advisor`
    /// - Windows: `%APPDATA%\elective-advisor`
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("elective-advisor")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty (or zero) here and set in `defaults` are
    /// updated, so upgrading adds new settings without touching user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.advisor.response_file.is_empty() && !defaults.advisor.response_file.is_empty() {
            self.advisor
                .response_file
                .clone_from(&defaults.advisor.response_file);
            changed = true;
        }
        if self.advisor.expected_count == 0 && defaults.advisor.expected_count != 0 {
            self.advisor.expected_count = defaults.advisor.expected_count;
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the configuration file is untouched.
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// config.apply_overrides(&ConfigOverrides {
    ///     level: Some("debug".to_string()),
    ///     ..Default::default()
    /// });
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(ai_enabled) = overrides.ai_enabled {
            self.advisor.ai_enabled = ai_enabled;
        }
        if let Some(response_file) = &overrides.response_file {
            self.advisor.response_file = Self::expand_variables(response_file);
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir = Self::expand_variables(reports_dir);
        }
    }

    /// Apply overrides from the process environment
    ///
    /// `ELECTIVE_ADVISOR_AI_ENABLED` switches the live backend; unset leaves
    /// the configured value alone.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var(AI_ENABLED_ENV) {
            self.advisor.ai_enabled = parse_bool_token(&value);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_app_dir`](Self::get_app_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand the `$ELECTIVE_ADVISOR` variable in a string
    ///
    /// ```ignore
    /// let expanded = Config::expand_variables("$ELECTIVE_ADVISOR/logs/advisor.log");
    /// // "/home/user/.config/elective-advisor/logs/advisor.log"
    /// ```
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(APP_DIR_VARIABLE) {
            let app_dir = Self::get_app_dir();
            value.replace(APP_DIR_VARIABLE, app_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. `$ELECTIVE_ADVISOR` is expanded
    /// in every path-like value.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.advisor.response_file = Self::expand_variables(&config.advisor.response_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// - Debug: Uses `DefaultCLIConfigDebug.toml`
    /// - Release: Uses `DefaultCLIConfigRelease.toml`
    ///
    /// # Panics
    /// Panics if the embedded default configuration cannot be parsed. The
    /// defaults are compiled in and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - File exists: load it, merge missing fields from defaults, save if anything was added
    /// - First run: create the config directory and save the defaults there
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// ```toml
    /// [logging]
    /// level = "info"
    /// file = "$ELECTIVE_ADVISOR/logs/elective-advisor.log"
    /// verbose = false
    ///
    /// [advisor]
    /// ai_enabled = false
    /// response_file = ""
    /// expected_count = 10
    ///
    /// [paths]
    /// reports_dir = "$ELECTIVE_ADVISOR/reports"
    /// ```
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `ai_enabled`,
    /// `response_file`, `expected_count`, `reports_dir`. Underscores may be
    /// written as dashes.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "ai_enabled" | "ai-enabled" => Some(self.advisor.ai_enabled.to_string()),
            "response_file" | "response-file" => Some(self.advisor.response_file.clone()),
            "expected_count" | "expected-count" => Some(self.advisor.expected_count.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Booleans accept `true`/`false`; `expected_count` must be an integer
    /// from 1 to [`MAX_EXPECTED_RECORDS`]. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "ai_enabled" | "ai-enabled" => {
                self.advisor.ai_enabled = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'ai_enabled': '{value}'"))?;
            }
            "response_file" | "response-file" => self.advisor.response_file = value.to_string(),
            "expected_count" | "expected-count" => {
                self.advisor.expected_count = value
                    .parse::<usize>()
                    .ok()
                    .filter(|count| {
                        i64::try_from(*count)
                            .is_ok_and(|n| (1..=MAX_EXPECTED_RECORDS).contains(&n))
                    })
                    .ok_or_else(|| {
                        format!(
                            "Invalid value for 'expected_count': '{value}' (expected an integer from 1 to {MAX_EXPECTED_RECORDS})"
                        )
                    })?;
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "ai_enabled" | "ai-enabled" => self.advisor.ai_enabled = defaults.advisor.ai_enabled,
            "response_file" | "response-file" => self
                .advisor
                .response_file
                .clone_from(&defaults.advisor.response_file),
            "expected_count" | "expected-count" => {
                self.advisor.expected_count = defaults.advisor.expected_count;
            }
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[advisor]")?;
        writeln!(f, "  ai_enabled = {}", self.advisor.ai_enabled)?;
        writeln!(f, "  response_file = \"{}\"", self.advisor.response_file)?;
        writeln!(f, "  expected_count = {}", self.advisor.expected_count)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
