//! Deterministic score reduction: findings in, bounded rating out.

use crate::analyzer::vocab;
use crate::analyzer::{Faculty, Finding};

const BASE_SCORE: i32 = 100;

/// Reduces a findings collection to a 0-100 rating.
///
/// Starts at 100, subtracts 10 per critical, 5 per warning, and 2 per
/// suggestion, then applies the faculty adjustment and clamps. Pure function:
/// the same findings and adjustment always produce the same score.
#[must_use]
pub fn score(findings: &[Finding], faculty_adjustment: i32) -> u8 {
    let deductions: i32 = findings.iter().map(|f| f.severity.penalty()).sum();
    let total = BASE_SCORE - deductions + faculty_adjustment;
    u8::try_from(total.clamp(0, 100)).unwrap_or(0)
}

/// Score delta in {-2, 0, +1, +3, +5} from how densely the resume uses the
/// declared field's keywords. Independent of the faculty-fit check, which
/// only ever contributes a suggestion-level finding.
#[must_use]
pub fn faculty_adjustment(text: &str, faculty: Option<Faculty>) -> i32 {
    let Some(faculty) = faculty else {
        return 0;
    };

    match vocab::faculty_keyword_hits(text, faculty) {
        n if n >= 4 => 5,
        3 => 3,
        2 => 1,
        1 => 0,
        _ => -2,
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
