use std::fmt::Write;

use crate::analyzer::Severity;
use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

pub struct MarkdownFormatter;

impl MarkdownFormatter {
    const fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "❌",
            Severity::Warning => "⚠️",
            Severity::Suggestion => "💡",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Analysis Report\n\n");

        // Summary section
        output.push_str("## Summary\n\n");
        let _ = writeln!(output, "| Metric | Value |");
        let _ = writeln!(output, "|--------|-------|");
        let _ = writeln!(output, "| Score | **{}/100** |", report.statistics.score);
        let _ = writeln!(output, "| Words | {} |", report.statistics.word_count);
        let _ = writeln!(output, "| Characters | {} |", report.statistics.char_count);
        let _ = writeln!(
            output,
            "| Critical issues | {} |",
            report.count_of(Severity::Critical)
        );
        let _ = writeln!(
            output,
            "| Warnings | {} |",
            report.count_of(Severity::Warning)
        );
        let _ = writeln!(
            output,
            "| Suggestions | {} |",
            report.count_of(Severity::Suggestion)
        );
        if report.statistics.faculty_adjustment != 0 {
            let _ = writeln!(
                output,
                "| Faculty adjustment | {:+} |",
                report.statistics.faculty_adjustment
            );
        }
        output.push('\n');

        if report.is_clean() {
            output.push_str("✅ No issues found. Your resume looks great!\n");
            return Ok(output);
        }

        // One section per category, findings in check order
        output.push_str("## Issues by Category\n\n");
        for (category, findings) in report.by_category() {
            let _ = writeln!(output, "### {}\n", capitalize(category.as_str()));
            for finding in findings {
                let _ = writeln!(
                    output,
                    "- {} **{}**: {}",
                    Self::severity_icon(finding.severity),
                    finding.severity,
                    finding.message
                );
                let _ = writeln!(output, "  - {}", finding.suggestion);
            }
            output.push('\n');
        }

        Ok(output)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
