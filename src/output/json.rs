use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    statistics: JsonStatistics,
    issues: Vec<JsonIssue<'a>>,
    issues_by_category: IndexMap<&'a str, Vec<JsonIssue<'a>>>,
}

#[derive(Serialize)]
struct JsonStatistics {
    word_count: usize,
    char_count: usize,
    score: u8,
    faculty_adjustment: i32,
    critical: usize,
    warnings: usize,
    suggestions: usize,
}

#[derive(Serialize)]
struct JsonIssue<'a> {
    severity: &'a str,
    category: &'a str,
    message: &'a str,
    suggestion: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let issues: Vec<JsonIssue<'_>> = report.findings.iter().map(convert_finding).collect();

        let issues_by_category = report
            .by_category()
            .into_iter()
            .map(|(category, findings)| {
                (
                    category.as_str(),
                    findings.into_iter().map(convert_finding).collect(),
                )
            })
            .collect();

        let output = JsonOutput {
            statistics: JsonStatistics {
                word_count: report.statistics.word_count,
                char_count: report.statistics.char_count,
                score: report.statistics.score,
                faculty_adjustment: report.statistics.faculty_adjustment,
                critical: report.count_of(crate::analyzer::Severity::Critical),
                warnings: report.count_of(crate::analyzer::Severity::Warning),
                suggestions: report.count_of(crate::analyzer::Severity::Suggestion),
            },
            issues,
            issues_by_category,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_finding(finding: &crate::analyzer::Finding) -> JsonIssue<'_> {
    JsonIssue {
        severity: finding.severity.as_str(),
        category: finding.category.as_str(),
        message: &finding.message,
        suggestion: &finding.suggestion,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
