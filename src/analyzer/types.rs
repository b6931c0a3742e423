use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// How much a finding hurts the overall rating.
///
/// Ordering is by impact: `Critical > Warning > Suggestion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Suggestion,
    Warning,
    Critical,
}

impl Severity {
    /// Points deducted from the base score per finding of this severity.
    #[must_use]
    pub const fn penalty(self) -> i32 {
        match self {
            Self::Critical => 10,
            Self::Warning => 5,
            Self::Suggestion => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The aspect of the resume a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Content,
    Formatting,
    Keywords,
    Structure,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Formatting => "formatting",
            Self::Keywords => "keywords",
            Self::Structure => "structure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem detected in the resume, with remediation text.
///
/// Pure immutable value: one check produces zero or more of these, and they
/// carry no identity or relationship to other findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub suggestion: String,
}

impl Finding {
    #[must_use]
    pub fn new(
        severity: Severity,
        category: Category,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self.severity, Severity::Critical)
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }

    #[must_use]
    pub const fn is_suggestion(&self) -> bool {
        matches!(self.severity, Severity::Suggestion)
    }
}

/// Declared field of study, used to pick a keyword list for the faculty-fit
/// check and the score adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Faculty {
    Sciences,
    Engineering,
    Arts,
    Business,
}

impl Faculty {
    pub const ALL: [Self; 4] = [Self::Sciences, Self::Engineering, Self::Arts, Self::Business];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sciences => "sciences",
            Self::Engineering => "engineering",
            Self::Arts => "arts",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Faculty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sciences" => Ok(Self::Sciences),
            "engineering" => Ok(Self::Engineering),
            "arts" => Ok(Self::Arts),
            "business" => Ok(Self::Business),
            _ => Err(format!("Unknown faculty: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
