//! The analysis report: statistics, findings, and the derived score.

use indexmap::IndexMap;
use serde::Serialize;

use crate::analyzer::{Category, Finding, Severity};
use crate::score;

/// Document statistics and the overall rating.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub word_count: usize,
    pub char_count: usize,
    pub score: u8,
    pub faculty_adjustment: i32,
}

/// One complete analysis result, ready for formatting.
///
/// Findings keep check-execution order; the grouping helpers provide the
/// severity and category views consumers render.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub statistics: Statistics,
    pub findings: Vec<Finding>,
}

impl Report {
    /// Assembles a report from the engine output. The score is recomputed
    /// here and nowhere else, so it can never drift from the findings.
    #[must_use]
    pub fn build(text: &str, findings: Vec<Finding>, faculty_adjustment: i32) -> Self {
        let statistics = Statistics {
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
            score: score::score(&findings, faculty_adjustment),
            faculty_adjustment,
        };
        Self {
            statistics,
            findings,
        }
    }

    #[must_use]
    pub fn count_of(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// Findings of one severity, in original order.
    #[must_use]
    pub fn with_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect()
    }

    /// Findings grouped by category, preserving first-seen category order.
    #[must_use]
    pub fn by_category(&self) -> IndexMap<Category, Vec<&Finding>> {
        let mut groups: IndexMap<Category, Vec<&Finding>> = IndexMap::new();
        for finding in &self.findings {
            groups.entry(finding.category).or_default().push(finding);
        }
        groups
    }

    #[must_use]
    pub fn has_critical(&self) -> bool {
        self.findings.iter().any(Finding::is_critical)
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
