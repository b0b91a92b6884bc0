//! Tests for the check and explain commands.

use super::check::{RecordReport, RecordStatus, check_document, read_document};
use super::cmd_check;
use super::explain::explain_rule;
use crate::cli::CheckArgs;
use fieldcheck::error::FieldcheckError;
use fieldcheck::exit_codes;
use fieldcheck::Schema;
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCHEMA: &str = r#"
name: User
fields:
  - name: name
    kind: text
    rule: "len:4"
  - name: code
    kind: int
    rule: "in:1,2,3"
  - name: tags
    kind: text_list
    rule: "in:a,b"
"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn schema() -> Schema {
    Schema::from_yaml(SCHEMA).unwrap()
}

// =========================================================================
// check
// =========================================================================

#[test]
fn test_check_document_valid() {
    let doc = json!({"name": "Anna", "code": 2, "tags": ["a", "b", "a"]});
    assert_eq!(check_document(&schema(), &doc).unwrap(), RecordStatus::Valid);
}

#[test]
fn test_check_document_invalid_report() {
    let doc = json!({"name": "Bob", "code": 9, "tags": ["a", "x", "y"]});

    let report = RecordReport {
        path: PathBuf::from("bob.json"),
        status: check_document(&schema(), &doc).unwrap(),
    };

    assert!(!report.passed());
    assert_eq!(
        report.format(),
        "bob.json: invalid\n\
         \x20 - name: expected string of length 4, go string of length 3\n\
         \x20 - code: value 9 not found in [1 2 3]\n\
         \x20 - tags[1]: value x not found in [a b]\n"
    );
}

#[test]
fn test_check_document_rejects_non_object() {
    let status = check_document(&schema(), &json!("just a string")).unwrap();
    assert_eq!(
        status,
        RecordStatus::Rejected("wrong argument given, should be a struct".to_string())
    );
}

#[test]
fn test_check_document_rejects_unexported_rule() {
    let schema = Schema::from_yaml(
        "fields:\n  - name: pin\n    kind: text\n    rule: \"len:4\"\n    exported: false\n",
    )
    .unwrap();

    let status = check_document(&schema, &json!({"pin": "1234"})).unwrap();
    assert_eq!(
        status,
        RecordStatus::Rejected(
            "validation for unexported field is not allowed (field 'pin')".to_string()
        )
    );
}

#[test]
fn test_check_document_defect_is_error() {
    let schema = Schema::from_yaml("fields:\n  - name: name\n    kind: text\n    rule: \"regex:^A\"\n").unwrap();

    let err = check_document(&schema, &json!({"name": "Anna"})).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::CONFIGURATION_DEFECT);
    assert!(err.to_string().contains("unsupported validator type regex"));
}

#[test]
fn test_check_document_rejects_wrong_typed_value() {
    let doc = json!({"name": 1234, "code": 2, "tags": []});
    assert_eq!(
        check_document(&schema(), &doc).unwrap(),
        RecordStatus::Rejected("field 'name' should be text, found integer".to_string())
    );
}

#[test]
fn test_check_document_rejects_missing_key() {
    let doc = json!({"name": "Anna", "tags": []});
    assert_eq!(
        check_document(&schema(), &doc).unwrap(),
        RecordStatus::Rejected("missing field 'code'".to_string())
    );
}

#[test]
fn test_check_document_rejects_mixed_array() {
    let doc = json!({"name": "Anna", "code": 1, "tags": ["ab", 5]});
    assert_eq!(
        check_document(&schema(), &doc).unwrap(),
        RecordStatus::Rejected("field 'tags[1]' should be text, found integer".to_string())
    );
}

#[test]
fn test_check_document_declared_bool_is_defect() {
    let schema = Schema::from_yaml("fields:\n  - name: active\n    kind: bool\n    rule: \"min:1\"\n").unwrap();

    let err = check_document(&schema, &json!({"active": true})).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::CONFIGURATION_DEFECT);
    assert!(err.to_string().contains("unsupported field type bool"));
}

#[test]
fn test_read_document_json_and_yaml() {
    let dir = TempDir::new().unwrap();
    let json_path = write(dir.path(), "a.JSON", r#"{"name": "Anna"}"#);
    let yaml_path = write(dir.path(), "b.yaml", "name: Anna\ncode: 2\n");

    assert_eq!(read_document(&json_path).unwrap(), json!({"name": "Anna"}));
    assert_eq!(
        read_document(&yaml_path).unwrap(),
        json!({"name": "Anna", "code": 2})
    );
}

#[test]
fn test_read_document_errors_are_user_errors() {
    let dir = TempDir::new().unwrap();
    let broken = write(dir.path(), "broken.json", "{not json");

    let err = read_document(&broken).unwrap_err();
    assert!(matches!(err, FieldcheckError::UserError(_)));
    assert!(err.to_string().contains("failed to parse record file"));

    let err = read_document(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read record file"));
}

#[test]
fn test_cmd_check_all_valid() {
    let dir = TempDir::new().unwrap();
    let schema = write(dir.path(), "user.yaml", SCHEMA);
    let record = write(dir.path(), "anna.yaml", "name: Anna\ncode: 1\ntags: []\n");

    let result = cmd_check(CheckArgs {
        schema,
        records: vec![record],
    });
    assert!(result.is_ok());
}

#[test]
fn test_cmd_check_counts_failures() {
    let dir = TempDir::new().unwrap();
    let schema = write(dir.path(), "user.yaml", SCHEMA);
    let good = write(dir.path(), "anna.json", r#"{"name": "Anna", "code": 3, "tags": ["b"]}"#);
    let bad = write(dir.path(), "bob.json", r#"{"name": "Bob", "code": 3, "tags": ["b"]}"#);
    let scalar = write(dir.path(), "scalar.yaml", "42\n");
    let mistyped = write(dir.path(), "mistyped.json", r#"{"name": "Anna", "code": "3", "tags": []}"#);

    let err = cmd_check(CheckArgs {
        schema,
        records: vec![good, bad, scalar, mistyped],
    })
    .unwrap_err();

    assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    assert_eq!(err.to_string(), "Validation failed: 3 of 4 User records failed");
}

#[test]
fn test_cmd_check_missing_schema() {
    let dir = TempDir::new().unwrap();
    let record = write(dir.path(), "anna.json", "{}");

    let err = cmd_check(CheckArgs {
        schema: dir.path().join("absent.yaml"),
        records: vec![record],
    })
    .unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

// =========================================================================
// explain
// =========================================================================

#[test]
fn test_explain_lists_checks() {
    assert_eq!(
        explain_rule("len:4,min:1,in:a,b").unwrap(),
        vec!["len 4", "min 1", "in [a b]"]
    );
    assert_eq!(explain_rule("in:").unwrap(), vec!["in []"]);
    assert_eq!(explain_rule("max").unwrap(), vec!["max (missing argument)"]);
}

#[test]
fn test_explain_unknown_check_is_defect() {
    let err = explain_rule("len:4,size:2").unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::CONFIGURATION_DEFECT);
}

#[test]
fn test_explain_empty_rule_is_user_error() {
    let err = explain_rule("").unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}
