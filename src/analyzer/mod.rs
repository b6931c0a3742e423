mod checks;
mod types;
pub mod vocab;

pub use types::{Category, Faculty, Finding, Severity};

use crate::config::{Config, Thresholds};

use checks::Patterns;

/// The rule-based analysis engine.
///
/// Holds the compiled patterns, vocabularies, and thresholds; `analyze` is a
/// pure function over its input. The engine performs no I/O and keeps no
/// state between invocations, so one instance can be shared freely across
/// threads.
pub struct Analyzer {
    patterns: Patterns,
    thresholds: Thresholds,
    action_verbs: Vec<String>,
    weak_words: Vec<String>,
}

impl Analyzer {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let extend = |base: &[&str], extra: &[String]| -> Vec<String> {
            base.iter()
                .map(|w| (*w).to_string())
                .chain(extra.iter().map(|w| w.to_lowercase()))
                .collect()
        };

        Self {
            patterns: Patterns::compile(),
            thresholds: config.thresholds.clone(),
            action_verbs: extend(vocab::ACTION_VERBS, &config.keywords.extra_action_verbs),
            weak_words: extend(vocab::WEAK_WORDS, &config.keywords.extra_weak_words),
        }
    }

    /// Runs the full battery of checks against extracted resume text.
    ///
    /// Findings come back in check-execution order: essential sections,
    /// formatting, content quality, keywords, structure, common mistakes,
    /// then the faculty-fit check when a faculty is declared. Identical
    /// input always yields identical output.
    #[must_use]
    pub fn analyze(&self, text: &str, faculty: Option<Faculty>) -> Vec<Finding> {
        // Hard gate: a near-empty document gets a single critical finding
        // and no further checks.
        if text.trim().chars().count() < self.thresholds.min_chars {
            return vec![Finding::new(
                Severity::Critical,
                Category::Content,
                "Resume appears to be too short or empty",
                "Ensure your resume contains substantial content (at least 100 words)",
            )];
        }

        let mut findings = Vec::new();
        findings.extend(self.check_essential_sections(text));
        findings.extend(self.check_formatting(text));
        findings.extend(self.check_content_quality(text));
        findings.extend(self.check_keywords(text));
        findings.extend(self.check_structure(text));
        findings.extend(self.check_common_mistakes(text));

        if let Some(faculty) = faculty {
            findings.extend(self.check_faculty_fit(text, faculty));
        }

        findings
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
