//! TOML configuration for check thresholds and vocabulary extensions.
//!
//! The built-in defaults match the published heuristics; a config file can
//! tune thresholds or append keywords but never removes built-in terms.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ResumeCheckError};

/// Default configuration file name, discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = ".resume-check.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub keywords: KeywordConfig,
}

/// Numeric knobs for the check groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Thresholds {
    /// Trimmed length below which the engine short-circuits with a single
    /// critical finding.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,

    /// Word count below which the resume is flagged as too brief.
    #[serde(default = "default_min_words")]
    pub min_words: usize,

    /// Word count above which the resume is flagged as too long.
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Characters per line before a line counts as long.
    #[serde(default = "default_long_line_len")]
    pub long_line_len: usize,

    /// Fraction of long lines (0.0-1.0) that triggers the formatting flag.
    #[serde(default = "default_long_line_ratio")]
    pub long_line_ratio: f64,

    /// Minimum candidate section headers before structure looks unclear.
    #[serde(default = "default_min_headers")]
    pub min_headers: usize,

    /// Minimum distinct action verbs before usage looks limited.
    #[serde(default = "default_min_action_verbs")]
    pub min_action_verbs: usize,

    /// Minimum faculty keyword hits before the faculty-fit check stays quiet.
    #[serde(default = "default_min_faculty_hits")]
    pub min_faculty_hits: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_chars: default_min_chars(),
            min_words: default_min_words(),
            max_words: default_max_words(),
            long_line_len: default_long_line_len(),
            long_line_ratio: default_long_line_ratio(),
            min_headers: default_min_headers(),
            min_action_verbs: default_min_action_verbs(),
            min_faculty_hits: default_min_faculty_hits(),
        }
    }
}

/// Additive vocabulary extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeywordConfig {
    /// Extra verbs counted alongside the built-in action-verb list.
    #[serde(default)]
    pub extra_action_verbs: Vec<String>,

    /// Extra phrases counted alongside the built-in weak-word list.
    #[serde(default)]
    pub extra_weak_words: Vec<String>,
}

const fn default_min_chars() -> usize {
    100
}

const fn default_min_words() -> usize {
    200
}

const fn default_max_words() -> usize {
    800
}

const fn default_long_line_len() -> usize {
    100
}

const fn default_long_line_ratio() -> f64 {
    0.3
}

const fn default_min_headers() -> usize {
    3
}

const fn default_min_action_verbs() -> usize {
    3
}

const fn default_min_faculty_hits() -> usize {
    2
}

impl Config {
    /// Loads configuration: an explicit path wins, otherwise the working
    /// directory is searched for `.resume-check.toml`, otherwise defaults.
    ///
    /// # Errors
    /// Returns an error if an explicitly given path is missing or any found
    /// file fails to parse or validate.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(ResumeCheckError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from_path(path);
        }

        let discovered = Path::new(CONFIG_FILE_NAME);
        if discovered.exists() {
            return Self::load_from_path(discovered);
        }

        Ok(Self::default())
    }

    /// Parses and validates a specific config file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ResumeCheckError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants the serde model cannot express.
    ///
    /// # Errors
    /// Returns a `Config` error describing the first violated invariant.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;

        if t.long_line_ratio <= 0.0 || t.long_line_ratio > 1.0 {
            return Err(ResumeCheckError::Config(format!(
                "thresholds.long_line_ratio must be in (0.0, 1.0], got {}",
                t.long_line_ratio
            )));
        }

        if t.max_words <= t.min_words {
            return Err(ResumeCheckError::Config(format!(
                "thresholds.max_words ({}) must be greater than min_words ({})",
                t.max_words, t.min_words
            )));
        }

        if t.min_chars == 0 || t.long_line_len == 0 {
            return Err(ResumeCheckError::Config(
                "thresholds.min_chars and thresholds.long_line_len must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Commented template written by `resume-check init`.
#[must_use]
pub const fn default_config_template() -> &'static str {
    r#"# resume-check configuration
# All values shown are the built-in defaults.

[thresholds]
# Trimmed length below which the resume is rejected as too short or empty.
min_chars = 100
# Flag the resume as too brief below this word count.
min_words = 200
# Flag the resume as too long above this word count.
max_words = 800
# A line longer than this many characters counts as long.
long_line_len = 100
# Flag formatting when more than this fraction of lines is long.
long_line_ratio = 0.3
# Minimum short lines that look like section headers.
min_headers = 3
# Minimum distinct action verbs expected.
min_action_verbs = 3
# Faculty keyword hits needed to satisfy the faculty-fit check.
min_faculty_hits = 2

[keywords]
# Appended to the built-in vocabularies; built-in terms always apply.
extra_action_verbs = []
extra_weak_words = []
"#
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
