use std::str::FromStr;

use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
    assert_eq!(
        OutputFormat::from_str("markdown").unwrap(),
        OutputFormat::Markdown
    );
    assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
}

#[test]
fn output_format_from_str_is_case_insensitive() {
    assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("Text").unwrap(), OutputFormat::Text);
}

#[test]
fn output_format_rejects_unknown() {
    assert!(OutputFormat::from_str("yaml").is_err());
    assert!(OutputFormat::from_str("").is_err());
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
