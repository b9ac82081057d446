//! Tests for domain models.

use chrono::{TimeZone, Utc};

use crate::db::models::*;

fn record(name: &str, language: Language) -> ProjectRecord {
    ProjectRecord {
        name: name.to_string(),
        project: Project {
            added: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            language,
            url: format!("https://example.com/{}", name),
        },
    }
}

#[test]
fn language_deserializes_from_lowercase() {
    let rust: Language = serde_json::from_str("\"rust\"").unwrap();
    assert_eq!(rust, Language::Rust);

    let typescript: Language = serde_json::from_str("\"typescript\"").unwrap();
    assert_eq!(typescript, Language::Typescript);
}

#[test]
fn language_rejects_unknown_values() {
    assert!(serde_json::from_str::<Language>("\"java\"").is_err());
    assert!(serde_json::from_str::<Language>("\"Rust\"").is_err());
    assert!("cobol".parse::<Language>().is_err());
}

#[test]
fn language_display_matches_parse() {
    for language in Language::ALL {
        let parsed: Language = language.to_string().parse().unwrap();
        assert_eq!(parsed, language);
    }
}

#[test]
fn project_record_serializes_nested_shape() {
    let value = serde_json::to_value(record("n1", Language::Go)).unwrap();

    assert_eq!(value["name"], "n1");
    assert_eq!(value["project"]["language"], "go");
    assert_eq!(value["project"]["url"], "https://example.com/n1");
    assert_eq!(value["project"]["added"], "2025-01-01T00:00:00Z");
}

#[test]
fn empty_query_matches_everything() {
    let query = ProjectQuery::default();
    for language in Language::ALL {
        assert!(query.matches(&record("any", language)));
    }
}

#[test]
fn language_query_matches_only_that_language() {
    let query = ProjectQuery {
        language: Some(Language::Python),
    };
    assert!(query.matches(&record("py", Language::Python)));
    assert!(!query.matches(&record("rs", Language::Rust)));
}
