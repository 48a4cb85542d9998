//! Recommendation sourcing
//!
//! The advisor asks a [`RecommendationSource`] for response text and decodes it
//! into records. The only source shipped here replays a canned response file;
//! a live model client plugs in behind the same trait.

use crate::core::catalog::{load_electives, CatalogError};
use crate::core::config::{AdvisorConfig, Config};
use crate::core::models::{CourseRecommendation, Elective};
use crate::core::parser::{parse_recommendations, ParseError};
use crate::core::prompt::{build_prompt, PromptRequest};
use crate::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names tried when no canned response path is configured, in order
pub const CANNED_RESPONSE_NAMES: [&str; 2] = ["recommendations.txt", "courses.json"];

/// Errors raised while producing recommendations
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// No canned response file exists at any candidate location
    #[error("No canned response found. Looked in: {}", .candidates.join(", "))]
    ResponseNotFound {
        /// Paths that were checked
        candidates: Vec<String>,
    },

    /// The response file exists but could not be read
    #[error("Cannot read response '{path}': {source}")]
    Read {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A JSON payload that is not a list of records
    #[error("Invalid JSON recommendation payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The elective catalog could not be loaded
    #[error("Elective catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    /// Template text with a non-numeric `Number`
    #[error("Recommendation text violates the template: {0}")]
    Parse(#[from] ParseError),

    /// `ai_enabled` is set but no live model client is available
    #[error("Live text generation is not available; set ai_enabled = false to use the canned response")]
    LiveBackendUnavailable,
}

/// Everything a source needs to produce recommendations
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    /// Application job identifier
    pub job_id: i64,
    /// Target job title (e.g., "Web Developer")
    pub job_name: String,
    /// Degree or program name
    pub degree_name: String,
    /// Electives to choose from
    pub electives: Vec<Elective>,
    /// Number of recommendations wanted
    pub count: usize,
}

impl RecommendationRequest {
    /// Replace the electives with the catalog at `path`
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be read or tokenized
    pub fn with_catalog(mut self, path: &Path) -> Result<Self, AdvisorError> {
        self.electives = load_electives(path)?;
        debug!("Loaded {} electives from {}", self.electives.len(), path.display());
        Ok(self)
    }

    /// Render the prompt a text-generation source would send
    #[must_use]
    pub fn prompt(&self) -> String {
        build_prompt(&PromptRequest {
            job_name: &self.job_name,
            degree_name: &self.degree_name,
            electives: &self.electives,
            count: self.count,
        })
    }
}

/// Upstream producer of recommendation text
pub trait RecommendationSource {
    /// Short name for log messages
    fn name(&self) -> &str;

    /// Produce the raw response for `request`
    ///
    /// # Errors
    /// Returns an error if the response cannot be produced
    fn generate(&self, request: &RecommendationRequest) -> Result<String, AdvisorError>;
}

/// Source that replays a response stored on disk
#[derive(Debug, Clone)]
pub struct CannedResponseSource {
    path: PathBuf,
}

impl CannedResponseSource {
    /// Replay the response stored at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the replayed response
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Locate a canned response file
    ///
    /// Tries `configured` first (when given), then each of
    /// [`CANNED_RESPONSE_NAMES`] in every directory of `search_dirs`, and
    /// returns the first path that exists.
    ///
    /// # Errors
    /// Returns [`AdvisorError::ResponseNotFound`] listing every candidate when none exists
    pub fn discover(configured: Option<&Path>, search_dirs: &[PathBuf]) -> Result<Self, AdvisorError> {
        let candidates: Vec<PathBuf> = configured
            .map(Path::to_path_buf)
            .into_iter()
            .chain(search_dirs.iter().flat_map(|dir| {
                CANNED_RESPONSE_NAMES.iter().map(move |name| dir.join(name))
            }))
            .collect();

        candidates
            .iter()
            .find(|path| path.is_file())
            .map(Self::new)
            .ok_or_else(|| AdvisorError::ResponseNotFound {
                candidates: candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
            })
    }
}

impl RecommendationSource for CannedResponseSource {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn generate(&self, request: &RecommendationRequest) -> Result<String, AdvisorError> {
        warn!(
            "Replaying canned recommendations from {} (job {} '{}')",
            self.path.display(),
            request.job_id,
            request.job_name
        );
        fs::read_to_string(&self.path).map_err(|source| AdvisorError::Read {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Directories searched for a canned response: the working directory, then the config directory
#[must_use]
pub fn default_search_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("."), Config::get_app_dir()]
}

/// Pick the source described by the advisor configuration
///
/// # Errors
/// Returns [`AdvisorError::LiveBackendUnavailable`] when `ai_enabled` is set,
/// or a discovery error when no canned response exists
pub fn select_source(
    config: &AdvisorConfig,
    search_dirs: &[PathBuf],
) -> Result<CannedResponseSource, AdvisorError> {
    if config.ai_enabled {
        return Err(AdvisorError::LiveBackendUnavailable);
    }
    let configured = (!config.response_file.is_empty()).then(|| Path::new(&config.response_file));
    CannedResponseSource::discover(configured, search_dirs)
}

/// Decode a raw response into records
///
/// A payload whose first non-blank character is `[` is read as a JSON list of
/// records; anything else is template text.
///
/// # Errors
/// Returns an error for invalid JSON or a non-numeric `Number` field
pub fn decode_response(raw: &str) -> Result<Vec<CourseRecommendation>, AdvisorError> {
    if raw.trim_start().starts_with('[') {
        debug!("Decoding recommendation payload as JSON");
        Ok(serde_json::from_str(raw)?)
    } else {
        debug!("Decoding recommendation payload as template text");
        Ok(parse_recommendations(raw)?)
    }
}

/// Interpret an environment-style boolean.
///
/// `1`, `true`, `yes`, `y`, `on` and `t` (any case, surrounding spaces ignored)
/// are true; everything else is false.
#[must_use]
pub fn parse_bool_token(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on" | "t"
    )
}

/// Produces recommendations from a source
pub struct Advisor<S: RecommendationSource> {
    source: S,
}

impl<S: RecommendationSource> Advisor<S> {
    /// Create an advisor backed by `source`
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The backing source
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Generate and decode recommendations for `request`
    ///
    /// # Errors
    /// Returns an error if the source fails or its response cannot be decoded
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<CourseRecommendation>, AdvisorError> {
        info!(
            "Requesting {} recommendations for '{}' ({}) from {} source",
            request.count,
            request.job_name,
            request.degree_name,
            self.source.name()
        );
        let raw = self.source.generate(request)?;
        let records = decode_response(&raw)?;
        if records.is_empty() {
            warn!("Source '{}' returned no recommendations", self.source.name());
        } else {
            info!("Decoded {} recommendations", records.len());
        }
        Ok(records)
    }
}
