//! Loading custom quiz content from disk.

use std::fs;
use std::path::PathBuf;

use serde_json::json;

use tui_quiz::core::{load_from_path, obfuscate, parse_config, ContentError};

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tui-quiz-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_custom_file_loads_with_defaults() {
    let doc = json!({
        "questions": [
            { "id": 1, "text": "Port for SSH?", "answer": "22" }
        ]
    });
    let path = temp_file("defaults.json", doc.to_string().as_bytes());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.questions.len(), 1);
    assert_eq!(config.questions[0].hint, "");
    assert_eq!(config.final_message, "");
    assert_eq!(config.final_hint, "");

    fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_reports_path() {
    let path = std::env::temp_dir().join("tui-quiz-does-not-exist.json");
    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }));
    assert!(err.to_string().contains("tui-quiz-does-not-exist.json"));
}

#[test]
fn test_empty_question_list_is_rejected() {
    let doc = json!({ "questions": [], "final_message": "done" });
    let err = parse_config(doc.to_string().as_bytes()).unwrap_err();
    assert!(matches!(err, ContentError::Empty));
}

#[test]
fn test_packed_blob_is_not_plain_json() {
    let doc = json!({
        "questions": [{ "id": 1, "text": "t", "answer": "a", "hint": "h" }],
        "final_message": "m",
        "final_hint": "f"
    })
    .to_string();
    let packed = obfuscate(doc.as_bytes());
    assert!(parse_config(&packed).is_err());
    assert!(!String::from_utf8_lossy(&packed).contains("questions"));
}
