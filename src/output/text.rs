use std::io::Write as IoWrite;

use crate::analyzer::{Finding, Severity};
use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

const RULE: &str = "======================================================================";
const THIN_RULE: &str = "----------------------------------------------------------------------";

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Suggestion => ansi::CYAN,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_severity_section(&self, title: &str, findings: &[&Finding], output: &mut Vec<u8>) {
        if findings.is_empty() {
            return;
        }

        let color = Self::severity_color(findings[0].severity);
        writeln!(output, "\n{}", self.colorize(title, color)).ok();
        writeln!(output, "{THIN_RULE}").ok();
        for (idx, finding) in findings.iter().enumerate() {
            writeln!(output, "\n{}. {}", idx + 1, finding.message).ok();
            writeln!(output, "   → {}", finding.suggestion).ok();
        }
    }

    fn format_category_groups(&self, report: &Report, output: &mut Vec<u8>) {
        writeln!(output, "\n{THIN_RULE}").ok();
        writeln!(output, "ISSUES BY CATEGORY").ok();
        writeln!(output, "{THIN_RULE}").ok();

        for (category, findings) in report.by_category() {
            writeln!(output, "\n{}:", category.as_str().to_uppercase()).ok();
            for finding in findings {
                let tag = format!("[{}]", finding.severity.as_str().to_uppercase());
                let colored_tag = self.colorize(&tag, Self::severity_color(finding.severity));
                writeln!(output, "  {colored_tag} {}", finding.message).ok();
                writeln!(output, "    → {}", finding.suggestion).ok();
            }
        }
    }

    fn format_summary(&self, report: &Report, output: &mut Vec<u8>) {
        writeln!(output, "Issue Summary:").ok();
        let critical = report.count_of(Severity::Critical).to_string();
        let warnings = report.count_of(Severity::Warning).to_string();
        let suggestions = report.count_of(Severity::Suggestion).to_string();
        writeln!(
            output,
            "  • Critical issues: {}",
            self.colorize(&critical, ansi::RED)
        )
        .ok();
        writeln!(
            output,
            "  • Warnings: {}",
            self.colorize(&warnings, ansi::YELLOW)
        )
        .ok();
        writeln!(
            output,
            "  • Suggestions: {}",
            self.colorize(&suggestions, ansi::CYAN)
        )
        .ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = Vec::new();

        writeln!(output, "\n{RULE}").ok();
        writeln!(output, "RESUME ANALYSIS REPORT").ok();
        writeln!(output, "{RULE}\n").ok();

        writeln!(output, "Resume Statistics:").ok();
        writeln!(output, "  • Word count: {}", report.statistics.word_count).ok();
        writeln!(output, "  • Character count: {}", report.statistics.char_count).ok();
        writeln!(output).ok();

        if report.is_clean() {
            let ok = self.colorize("No issues found. Your resume looks great!", ansi::GREEN);
            writeln!(output, "{ok}").ok();
        } else {
            self.format_summary(report, &mut output);

            self.format_severity_section(
                "CRITICAL ISSUES",
                &report.with_severity(Severity::Critical),
                &mut output,
            );
            self.format_severity_section(
                "WARNINGS",
                &report.with_severity(Severity::Warning),
                &mut output,
            );
            self.format_severity_section(
                "SUGGESTIONS",
                &report.with_severity(Severity::Suggestion),
                &mut output,
            );

            self.format_category_groups(report, &mut output);
        }

        writeln!(output, "\n{RULE}").ok();
        writeln!(output, "OVERALL SCORE: {}/100", report.statistics.score).ok();
        if self.verbose >= 1 && report.statistics.faculty_adjustment != 0 {
            writeln!(
                output,
                "  (includes faculty adjustment: {:+})",
                report.statistics.faculty_adjustment
            )
            .ok();
        }
        writeln!(output, "{RULE}").ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
