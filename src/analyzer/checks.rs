//! The individual check groups. Each one is an independent pass over the
//! text returning zero or more findings; `Analyzer::analyze` concatenates
//! their outputs in a fixed order.

use regex::Regex;

use super::types::{Category, Faculty, Finding, Severity};
use super::vocab;
use super::Analyzer;

/// Candidate section headers are short non-empty lines.
const HEADER_MAX_LEN: usize = 50;

/// Bullet-point advice only applies once the document has real length.
const BULLET_MIN_LINES: usize = 10;

/// Patterns shared by the check groups, compiled once per engine instance.
pub(super) struct Patterns {
    email: Regex,
    phone: Regex,
    experience: Regex,
    education: Regex,
    blank_runs: Regex,
    bullets: Regex,
    quantified: Regex,
    skills: Regex,
    summary: Regex,
    pronouns: Regex,
}

impl Patterns {
    pub(super) fn compile() -> Self {
        let re = |pattern| Regex::new(pattern).expect("Invalid regex");
        Self {
            email: re(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"),
            phone: re(r"[\d\s\-()+]{10,}"),
            experience: re(r"\b(experience|work\s+history|employment|professional\s+experience)\b"),
            education: re(r"\b(education|academic|qualifications|degree)\b"),
            blank_runs: re(r"\n{4,}"),
            bullets: re(r"(?m)^(?:[-•*]|\d+[.)])\s"),
            quantified: re(r"\d+%|\d+\s*(years?|months?)|\$\d+|\d+\+"),
            skills: re(r"\b(skills?|technical\s+skills?|competencies?)\b"),
            summary: re(r"\b(summary|profile|objective|about)\b"),
            pronouns: re(r"\b(i|me|my|we|our)\b"),
        }
    }
}

impl Analyzer {
    /// Contact information plus experience and education section markers.
    pub(super) fn check_essential_sections(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let text_lower = text.to_lowercase();

        if !self.patterns.email.is_match(text) {
            findings.push(Finding::new(
                Severity::Critical,
                Category::Content,
                "Email address not found",
                "Add a professional email address in your contact section",
            ));
        }

        if !self.patterns.phone.is_match(text) {
            findings.push(Finding::new(
                Severity::Warning,
                Category::Content,
                "Phone number not found",
                "Consider adding a phone number for better contact options",
            ));
        }

        if !self.patterns.experience.is_match(&text_lower) {
            findings.push(Finding::new(
                Severity::Critical,
                Category::Structure,
                "Experience section not clearly identified",
                "Add a clear \"Experience\" or \"Work History\" section",
            ));
        }

        if !self.patterns.education.is_match(&text_lower) {
            findings.push(Finding::new(
                Severity::Warning,
                Category::Structure,
                "Education section not clearly identified",
                "Add a clear \"Education\" section listing your degrees and institutions",
            ));
        }

        findings
    }

    /// Blank-line runs, overlong lines, and missing bullet points.
    pub(super) fn check_formatting(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        if self.patterns.blank_runs.is_match(text) {
            findings.push(Finding::new(
                Severity::Warning,
                Category::Formatting,
                "Excessive blank lines detected",
                "Remove extra blank lines to improve readability",
            ));
        }

        let lines: Vec<&str> = text.split('\n').collect();
        let long_lines = lines
            .iter()
            .filter(|line| line.chars().count() > self.thresholds.long_line_len)
            .count();
        #[allow(clippy::cast_precision_loss)]
        if long_lines as f64 > lines.len() as f64 * self.thresholds.long_line_ratio {
            findings.push(Finding::new(
                Severity::Suggestion,
                Category::Formatting,
                "Many lines are very long",
                "Consider breaking long lines for better readability",
            ));
        }

        if !self.patterns.bullets.is_match(text) && lines.len() > BULLET_MIN_LINES {
            findings.push(Finding::new(
                Severity::Suggestion,
                Category::Formatting,
                "Consider using bullet points for better readability",
                "Use bullet points (•, -, or *) to organize your experience and skills",
            ));
        }

        findings
    }

    /// Action-verb usage, weak language, quantified achievements, and length.
    pub(super) fn check_content_quality(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let text_lower = text.to_lowercase();

        let action_verb_count = self
            .action_verbs
            .iter()
            .filter(|verb| text_lower.contains(verb.as_str()))
            .count();
        if action_verb_count < self.thresholds.min_action_verbs {
            findings.push(Finding::new(
                Severity::Warning,
                Category::Content,
                "Limited use of action verbs",
                format!(
                    "Use more action verbs (found {action_verb_count}). \
                     Examples: achieved, managed, developed, implemented, created"
                ),
            ));
        }

        let weak_word_count = self
            .weak_words
            .iter()
            .filter(|word| text_lower.contains(word.as_str()))
            .count();
        if weak_word_count > 0 {
            findings.push(Finding::new(
                Severity::Suggestion,
                Category::Content,
                "Weak or uncertain language detected",
                "Replace weak words like \"assisted\", \"helped\", \"tried\" with stronger action verbs",
            ));
        }

        if !self.patterns.quantified.is_match(text) {
            findings.push(Finding::new(
                Severity::Warning,
                Category::Content,
                "Limited quantified achievements",
                "Add specific numbers, percentages, or metrics to demonstrate impact \
                 (e.g., \"increased sales by 25%\", \"managed team of 5\")",
            ));
        }

        let word_count = text.split_whitespace().count();
        if word_count < self.thresholds.min_words {
            findings.push(Finding::new(
                Severity::Warning,
                Category::Content,
                "Resume may be too brief",
                format!(
                    "Consider expanding your resume (currently ~{word_count} words). \
                     Aim for 300-500 words for most positions"
                ),
            ));
        } else if word_count > self.thresholds.max_words {
            findings.push(Finding::new(
                Severity::Suggestion,
                Category::Content,
                "Resume may be too long",
                format!(
                    "Consider condensing your resume (currently ~{word_count} words). \
                     Most resumes should be 1-2 pages"
                ),
            ));
        }

        findings
    }

    /// Skills section and summary/objective markers.
    pub(super) fn check_keywords(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let text_lower = text.to_lowercase();

        if !self.patterns.skills.is_match(&text_lower) {
            findings.push(Finding::new(
                Severity::Warning,
                Category::Keywords,
                "Skills section not clearly identified",
                "Add a dedicated \"Skills\" section listing relevant technical and soft skills",
            ));
        }

        if !self.patterns.summary.is_match(&text_lower) {
            findings.push(Finding::new(
                Severity::Suggestion,
                Category::Structure,
                "No summary or objective section found",
                "Consider adding a brief professional summary at the top of your resume",
            ));
        }

        findings
    }

    /// Short lines stand in for section headers; too few means the document
    /// probably lacks visible structure.
    pub(super) fn check_structure(&self, text: &str) -> Vec<Finding> {
        let potential_headers = text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty() && line.chars().count() < HEADER_MAX_LEN)
            .count();

        if potential_headers < self.thresholds.min_headers {
            return vec![Finding::new(
                Severity::Warning,
                Category::Structure,
                "Resume structure may be unclear",
                "Ensure your resume has clear section headers (e.g., EXPERIENCE, EDUCATION, SKILLS)",
            )];
        }

        Vec::new()
    }

    /// First-person pronouns and "references available upon request" boilerplate.
    pub(super) fn check_common_mistakes(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let text_lower = text.to_lowercase();

        if self.patterns.pronouns.is_match(&text_lower) {
            findings.push(Finding::new(
                Severity::Suggestion,
                Category::Content,
                "Personal pronouns detected",
                "Avoid using \"I\", \"me\", \"my\" in resumes. Use action verbs instead \
                 (e.g., \"Managed team\" instead of \"I managed a team\")",
            ));
        }

        if text_lower.contains("references") {
            findings.push(Finding::new(
                Severity::Suggestion,
                Category::Content,
                "References section found",
                "Remove \"References available upon request\" - it's assumed and takes up valuable space",
            ));
        }

        findings
    }

    /// Flags a resume that barely mentions the declared field of study.
    pub(super) fn check_faculty_fit(&self, text: &str, faculty: Faculty) -> Vec<Finding> {
        let hits = vocab::faculty_keyword_hits(text, faculty);
        if hits >= self.thresholds.min_faculty_hits {
            return Vec::new();
        }

        let (message, suggestion) = match faculty {
            Faculty::Sciences => (
                "Few science-specific terms for a Sciences profile",
                "Highlight research, publications, lab work, methodology, or data analysis \
                 to strengthen your resume for science roles.",
            ),
            Faculty::Engineering => (
                "Few engineering-specific terms for an Engineering profile",
                "Highlight technical skills, projects, tools, and concrete outcomes \
                 to better match engineering expectations.",
            ),
            Faculty::Arts => (
                "Few arts/creative terms for an Arts profile",
                "Include portfolio work, exhibitions, creative projects, or collaborative work \
                 to align with arts and design roles.",
            ),
            Faculty::Business => (
                "Few business-specific terms for a Business profile",
                "Highlight leadership, strategy, revenue, growth, client work, or metrics \
                 (e.g. ROI, KPIs) to strengthen your resume for business roles.",
            ),
        };

        vec![Finding::new(
            Severity::Suggestion,
            Category::Keywords,
            message,
            suggestion,
        )]
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
