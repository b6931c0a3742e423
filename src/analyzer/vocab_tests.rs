use super::*;

#[test]
fn vocabulary_sizes() {
    assert_eq!(ACTION_VERBS.len(), 15);
    assert_eq!(WEAK_WORDS.len(), 9);
    assert_eq!(faculty_keywords(Faculty::Sciences).len(), 9);
    assert_eq!(faculty_keywords(Faculty::Engineering).len(), 10);
    assert_eq!(faculty_keywords(Faculty::Arts).len(), 9);
    assert_eq!(faculty_keywords(Faculty::Business).len(), 12);
}

#[test]
fn vocabularies_are_lowercase() {
    let all = ACTION_VERBS
        .iter()
        .chain(WEAK_WORDS)
        .chain(Faculty::ALL.iter().flat_map(|f| faculty_keywords(*f)));
    for term in all {
        assert_eq!(*term, term.to_lowercase(), "term not lowercase: {term}");
    }
}

#[test]
fn keyword_hits_counts_distinct_terms() {
    let text = "Led a software project with technical design reviews";
    // project, technical, design, software
    assert_eq!(faculty_keyword_hits(text, Faculty::Engineering), 4);
}

#[test]
fn keyword_hits_case_insensitive() {
    assert_eq!(faculty_keyword_hits("RESEARCH LAB", Faculty::Sciences), 2);
}

#[test]
fn keyword_hits_counts_each_term_once() {
    let text = "research research research";
    assert_eq!(faculty_keyword_hits(text, Faculty::Sciences), 1);
}

#[test]
fn keyword_hits_matches_substrings() {
    // Substring matching is the established behavior: "roi" hits inside
    // "android" too.
    assert_eq!(faculty_keyword_hits("android apps", Faculty::Business), 1);
}

#[test]
fn keyword_hits_empty_text() {
    for faculty in Faculty::ALL {
        assert_eq!(faculty_keyword_hits("", faculty), 0);
    }
}
