use super::*;

#[test]
fn resolve_faculty_recognized_values() {
    assert_eq!(
        resolve_faculty(Some("engineering"), true),
        Some(Faculty::Engineering)
    );
    assert_eq!(
        resolve_faculty(Some("SCIENCES"), true),
        Some(Faculty::Sciences)
    );
    assert_eq!(resolve_faculty(Some("Arts"), true), Some(Faculty::Arts));
    assert_eq!(
        resolve_faculty(Some("business"), true),
        Some(Faculty::Business)
    );
}

#[test]
fn resolve_faculty_unrecognized_is_none() {
    assert_eq!(resolve_faculty(Some("astrology"), true), None);
    assert_eq!(resolve_faculty(Some(""), true), None);
}

#[test]
fn resolve_faculty_absent_is_none() {
    assert_eq!(resolve_faculty(None, true), None);
}

#[test]
fn color_choice_mapping() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn format_output_json_is_valid_json() {
    let report = Report::build("word ".repeat(10).as_str(), Vec::new(), 0);
    let rendered = format_output(OutputFormat::Json, &report, ColorMode::Never, 0).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["statistics"]["score"], 100);
}

#[test]
fn format_output_text_contains_score() {
    let report = Report::build("some text", Vec::new(), 0);
    let rendered = format_output(OutputFormat::Text, &report, ColorMode::Never, 0).unwrap();
    assert!(rendered.contains("OVERALL SCORE: 100/100"));
}

#[test]
fn load_config_no_config_returns_defaults() {
    let config = load_config(None, true).unwrap();
    assert_eq!(config, Config::default());
}
