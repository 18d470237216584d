//! Profile signal classification via a language model.
//!
//! Sends a [`SectionRecord`] to a model backend and turns its loosely
//! formatted reply into a [`Classification`]:
//!
//! - the reply is parsed leniently (JSON embedded in prose, Python-style
//!   dicts), see [`parse_model_output`]
//! - fields outside the allowed label sets are replaced by the weaker
//!   default instead of failing, see [`validate`]
//! - a failed call or unparseable reply is retried a bounded number of times,
//!   then surfaced as [`ClassifyError::Exhausted`]

pub mod backend;
pub mod parse;
pub mod prompt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::sections::SectionRecord;

pub use backend::{BackendKind, ModelBackend, ModelConfig, OllamaBackend, OpenRouterBackend};
pub use parse::parse_model_output;
pub use prompt::build_prompt;

/// Maximum number of notes kept from a model reply.
pub const MAX_NOTES: usize = 2;

/// Classification errors
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{backend} returned {status}: {body}")]
    Status {
        backend: &'static str,
        status: u16,
        body: String,
    },

    #[error("Invalid {backend} response format: {reason}")]
    InvalidResponse {
        backend: &'static str,
        reason: String,
    },

    #[error("No object found in model output")]
    NoObject,

    #[error("Failed to parse model output as JSON or dict: {0}")]
    Unparseable(String),

    #[error("Missing API key for {0} (set OPENROUTER_API_KEY or model.api_key)")]
    MissingApiKey(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Classification failed after {attempts} attempts: {last}")]
    Exhausted {
        attempts: usize,
        last: Box<ClassifyError>,
    },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadlineStatus {
    Missing,
    Generic,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStatus {
    Missing,
    Thin,
    Substantive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillsStatus {
    Missing,
    Generic,
    Focused,
}

/// Validated classifier output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub headline_status: HeadlineStatus,
    pub summary_status: SummaryStatus,
    pub skills_status: SkillsStatus,
    pub notes: Vec<String>,
}

impl Default for Classification {
    /// The weakest non-missing labels, used for invalid fields.
    fn default() -> Self {
        Self {
            headline_status: HeadlineStatus::Generic,
            summary_status: SummaryStatus::Thin,
            skills_status: SkillsStatus::Generic,
            notes: Vec::new(),
        }
    }
}

/// Coerce a parsed reply into a [`Classification`].
///
/// Never fails: a missing or unknown label falls back to the default for
/// that field, a non-list `notes` becomes empty, non-string notes are
/// dropped and at most [`MAX_NOTES`] are kept. Extra keys are ignored.
pub fn validate(output: &Map<String, Value>) -> Classification {
    let defaults = Classification::default();

    Classification {
        headline_status: label(output, "headline_status").unwrap_or(defaults.headline_status),
        summary_status: label(output, "summary_status").unwrap_or(defaults.summary_status),
        skills_status: label(output, "skills_status").unwrap_or(defaults.skills_status),
        notes: notes(output),
    }
}

fn label<T: serde::de::DeserializeOwned>(output: &Map<String, Value>, field: &str) -> Option<T> {
    let value = output.get(field);
    let parsed = value
        .filter(|v| v.is_string())
        .and_then(|v| serde_json::from_value(v.clone()).ok());
    if parsed.is_none() {
        warn!(field, value = ?value, "Invalid classification field, using default");
    }
    parsed
}

fn notes(output: &Map<String, Value>) -> Vec<String> {
    match output.get("notes") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .take(MAX_NOTES)
            .collect(),
        other => {
            warn!(value = ?other, "Invalid classification notes, using empty list");
            Vec::new()
        }
    }
}

/// Runs classification against a backend with bounded retry.
pub struct Classifier {
    backend: Box<dyn ModelBackend>,
    max_attempts: usize,
}

impl Classifier {
    /// Two attempts: the first call plus one retry.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 2;

    pub fn new(backend: Box<dyn ModelBackend>) -> Self {
        Self {
            backend,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Build the backend described by `config`.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let backend = backend::from_config(config)?;
        Ok(Self::new(backend).with_max_attempts(config.max_attempts))
    }

    /// Total attempts per record; values below 1 are treated as 1.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Classify a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::Exhausted`] wrapping the last failure once
    /// every attempt failed, or a serialization error if the prompt cannot
    /// be built.
    pub async fn classify(&self, record: &SectionRecord) -> Result<Classification> {
        let prompt = build_prompt(record)?;
        let mut attempt = 1;

        loop {
            match self.attempt(&prompt).await {
                Ok(classification) => {
                    info!(backend = self.backend.name(), attempt, "Classification complete");
                    return Ok(classification);
                }
                Err(err) if attempt < self.max_attempts => {
                    warn!(backend = self.backend.name(), attempt, error = %err, "Classification attempt failed, retrying");
                    attempt += 1;
                }
                Err(err) => {
                    return Err(ClassifyError::Exhausted {
                        attempts: attempt,
                        last: Box::new(err),
                    });
                }
            }
        }
    }

    async fn attempt(&self, prompt: &str) -> Result<Classification> {
        let raw = self.backend.complete(prompt).await?;
        let parsed = parse_model_output(&raw)?;
        Ok(validate(&parsed))
    }
}
