use super::*;
use crate::analyzer::Category;

fn sample_report() -> Report {
    let findings = vec![
        Finding::new(
            Severity::Critical,
            Category::Content,
            "Email address not found",
            "Add a professional email address",
        ),
        Finding::new(
            Severity::Warning,
            Category::Keywords,
            "Skills section not clearly identified",
            "Add a dedicated Skills section",
        ),
        Finding::new(
            Severity::Suggestion,
            Category::Content,
            "Personal pronouns detected",
            "Use action verbs instead",
        ),
    ];
    Report::build("some resume text here", findings, 0)
}

#[test]
fn text_report_has_header_and_score() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();
    assert!(output.contains("RESUME ANALYSIS REPORT"));
    // 100 - 10 - 5 - 2
    assert!(output.contains("OVERALL SCORE: 83/100"));
}

#[test]
fn text_report_shows_statistics_and_summary() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();
    assert!(output.contains("Word count: 4"));
    assert!(output.contains("Critical issues: 1"));
    assert!(output.contains("Warnings: 1"));
    assert!(output.contains("Suggestions: 1"));
}

#[test]
fn text_report_groups_by_severity_and_category() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();
    assert!(output.contains("CRITICAL ISSUES"));
    assert!(output.contains("WARNINGS"));
    assert!(output.contains("SUGGESTIONS"));
    assert!(output.contains("ISSUES BY CATEGORY"));
    assert!(output.contains("CONTENT:"));
    assert!(output.contains("KEYWORDS:"));
    assert!(output.contains("[CRITICAL] Email address not found"));
}

#[test]
fn text_report_includes_suggestions() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();
    assert!(output.contains("→ Add a professional email address"));
}

#[test]
fn clean_report_celebrates() {
    let report = Report::build("clean resume text", Vec::new(), 0);
    let output = TextFormatter::new(ColorMode::Never).format(&report).unwrap();
    assert!(output.contains("No issues found"));
    assert!(output.contains("OVERALL SCORE: 100/100"));
    assert!(!output.contains("ISSUES BY CATEGORY"));
}

#[test]
fn never_mode_has_no_ansi_codes() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();
    assert!(!output.contains("\x1b["));
}

#[test]
fn always_mode_colors_severity_tags() {
    let output = TextFormatter::new(ColorMode::Always)
        .format(&sample_report())
        .unwrap();
    assert!(output.contains("\x1b[31m"));
    assert!(output.contains("\x1b[33m"));
    assert!(output.contains("\x1b[36m"));
}

#[test]
fn verbose_shows_faculty_adjustment() {
    let report = Report::build("text", Vec::new(), 3);
    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&report)
        .unwrap();
    assert!(output.contains("faculty adjustment: +3"));

    let quiet_output = TextFormatter::new(ColorMode::Never).format(&report).unwrap();
    assert!(!quiet_output.contains("faculty adjustment"));
}
