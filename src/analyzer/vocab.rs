//! Built-in vocabularies used by the heuristic checks.
//!
//! Modeled as constant tables rather than branches inside the checks, so new
//! terms can be added (or supplied via config) without touching check logic.

use super::types::Faculty;

/// Strong action verbs that should open experience bullet points.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "managed",
    "developed",
    "implemented",
    "created",
    "designed",
    "led",
    "improved",
    "increased",
    "reduced",
    "optimized",
    "collaborated",
    "executed",
    "delivered",
    "built",
];

/// Weak or uncertain phrasing that dilutes impact.
pub const WEAK_WORDS: &[&str] = &[
    "assisted",
    "helped",
    "tried",
    "attempted",
    "hopefully",
    "maybe",
    "somewhat",
    "kind of",
    "sort of",
];

const SCIENCES_KEYWORDS: &[&str] = &[
    "research",
    "publication",
    "lab",
    "methodology",
    "data analysis",
    "experiment",
    "journal",
    "hypothesis",
    "peer-reviewed",
];

const ENGINEERING_KEYWORDS: &[&str] = &[
    "project",
    "technical",
    "design",
    "implementation",
    "software",
    "system",
    "tool",
    "programming",
    "development",
    "build",
];

const ARTS_KEYWORDS: &[&str] = &[
    "portfolio",
    "creative",
    "exhibition",
    "design",
    "curation",
    "visual",
    "installation",
    "commission",
    "collaboration",
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "revenue",
    "growth",
    "strategy",
    "management",
    "leadership",
    "budget",
    "client",
    "sales",
    "marketing",
    "analytics",
    "roi",
    "kpi",
];

/// Terms that strengthen a resume for the given field of study.
#[must_use]
pub const fn faculty_keywords(faculty: Faculty) -> &'static [&'static str] {
    match faculty {
        Faculty::Sciences => SCIENCES_KEYWORDS,
        Faculty::Engineering => ENGINEERING_KEYWORDS,
        Faculty::Arts => ARTS_KEYWORDS,
        Faculty::Business => BUSINESS_KEYWORDS,
    }
}

/// Counts how many of the faculty's keywords occur in `text` as raw
/// case-insensitive substrings. Substring matching over-counts short terms
/// embedded in longer words (e.g. "roi"), but it is the established behavior
/// the rating depends on.
#[must_use]
pub fn faculty_keyword_hits(text: &str, faculty: Faculty) -> usize {
    let text_lower = text.to_lowercase();
    faculty_keywords(faculty)
        .iter()
        .filter(|k| text_lower.contains(*k))
        .count()
}

#[cfg(test)]
#[path = "vocab_tests.rs"]
mod tests;
