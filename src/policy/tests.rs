//! Tests for policy resolution and validation.

use super::{RetentionPolicy, RetentionRequest};
use crate::config::{AgeUnit, Config, FolderRemovalMode, PatternType};
use std::path::PathBuf;

fn full_config() -> Config {
    Config {
        base_folder: Some("/var/log/app".to_string()),
        pattern_type: PatternType::Glob,
        patterns: vec!["**/*.log".to_string()],
        age: 30,
        age_unit: AgeUnit::Days,
        folder_removal_mode: FolderRemovalMode::None,
        dry_run: false,
        report_details: true,
    }
}

#[test]
fn config_defaults_apply_when_request_is_empty() {
    let policy = RetentionPolicy::resolve(&full_config(), &RetentionRequest::default()).unwrap();

    assert_eq!(policy.base_folder, PathBuf::from("/var/log/app"));
    assert_eq!(policy.pattern_type, PatternType::Glob);
    assert_eq!(policy.patterns, vec!["**/*.log"]);
    assert_eq!(policy.age_amount, 30);
    assert_eq!(policy.age_unit, AgeUnit::Days);
    assert_eq!(policy.folder_removal_mode, FolderRemovalMode::None);
    assert!(!policy.dry_run);
    assert!(policy.report_details);
}

#[test]
fn request_overrides_win_over_config() {
    let request = RetentionRequest {
        base_folder: Some("/srv/archive".to_string()),
        age: Some(7),
        age_unit: Some(AgeUnit::Weeks),
        folder_removal_mode: Some(FolderRemovalMode::Aged),
        dry_run: Some(true),
        ..Default::default()
    };

    let policy = RetentionPolicy::resolve(&full_config(), &request).unwrap();

    assert_eq!(policy.base_folder, PathBuf::from("/srv/archive"));
    assert_eq!(policy.age_amount, 7);
    assert_eq!(policy.age_unit, AgeUnit::Weeks);
    assert_eq!(policy.folder_removal_mode, FolderRemovalMode::Aged);
    assert!(policy.dry_run);
    // Untouched fields keep the config values
    assert_eq!(policy.patterns, vec!["**/*.log"]);
}

#[test]
fn missing_base_folder_is_rejected() {
    let mut config = full_config();
    config.base_folder = None;

    let result = RetentionPolicy::resolve(&config, &RetentionRequest::default());
    assert!(result.unwrap_err().to_string().contains("baseFolder"));
}

#[test]
fn blank_base_folder_is_rejected() {
    let request = RetentionRequest {
        base_folder: Some("   ".to_string()),
        ..Default::default()
    };
    let result = RetentionPolicy::resolve(&full_config(), &request);
    assert!(result.is_err());
}

#[test]
fn relative_base_folder_is_rejected() {
    let request = RetentionRequest {
        base_folder: Some("var/log".to_string()),
        ..Default::default()
    };
    let err = RetentionPolicy::resolve(&full_config(), &request).unwrap_err();
    assert!(err.to_string().contains("absolute"));
}

#[test]
fn filesystem_root_base_folder_is_rejected() {
    let request = RetentionRequest {
        base_folder: Some("/".to_string()),
        ..Default::default()
    };
    let err = RetentionPolicy::resolve(&full_config(), &request).unwrap_err();
    assert!(err.to_string().contains("filesystem root"));
}

#[test]
fn parent_traversal_to_root_is_rejected() {
    for base in ["/..", "/x/..", "/x/y/../.."] {
        let request = RetentionRequest {
            base_folder: Some(base.to_string()),
            ..Default::default()
        };
        let err = RetentionPolicy::resolve(&full_config(), &request).unwrap_err();
        assert!(
            err.to_string().contains("filesystem root"),
            "'{}' should resolve to the root and be rejected",
            base
        );
    }
}

#[test]
fn dot_components_are_normalized_away() {
    let request = RetentionRequest {
        base_folder: Some("/var/log/./app/../data".to_string()),
        ..Default::default()
    };
    let policy = RetentionPolicy::resolve(&full_config(), &request).unwrap();
    assert_eq!(policy.base_folder, PathBuf::from("/var/log/data"));
}

#[test]
fn zero_age_is_rejected() {
    let mut config = full_config();
    config.age = 0;

    let result = RetentionPolicy::resolve(&config, &RetentionRequest::default());
    assert!(result.unwrap_err().to_string().contains("age"));
}

#[test]
fn overflowing_age_threshold_is_rejected() {
    // Type-valid but absurd: u64::MAX years does not fit in a seconds
    // threshold and must fail resolution, not wrap or panic later.
    let request = RetentionRequest {
        age: Some(u64::MAX),
        age_unit: Some(AgeUnit::Years),
        ..Default::default()
    };
    let err = RetentionPolicy::resolve(&full_config(), &request).unwrap_err();
    assert!(err.to_string().contains("threshold range"));
}

#[test]
fn invalid_override_aborts_rather_than_falling_back() {
    // Config has a valid age, request supplies an invalid one: the override
    // must abort the run, not silently fall back to the default.
    let request = RetentionRequest {
        age: Some(0),
        ..Default::default()
    };
    let result = RetentionPolicy::resolve(&full_config(), &request);
    assert!(result.is_err());
}

#[test]
fn empty_pattern_list_is_rejected() {
    let request = RetentionRequest {
        patterns: Some(vec![]),
        ..Default::default()
    };
    let err = RetentionPolicy::resolve(&full_config(), &request).unwrap_err();
    assert!(err.to_string().contains("patterns"));
}

#[test]
fn blank_pattern_entry_is_rejected() {
    let request = RetentionRequest {
        patterns: Some(vec!["*.log".to_string(), "".to_string()]),
        ..Default::default()
    };
    let result = RetentionPolicy::resolve(&full_config(), &request);
    assert!(result.is_err());
}

#[test]
fn request_parses_from_camel_case_json() {
    let json = r#"{
        "baseFolder": "/data",
        "patternType": "regex",
        "patterns": ["\\.bak$"],
        "age": 2,
        "ageUnit": "months",
        "folderRemovalMode": "empty",
        "dryRun": true,
        "reportDetails": false
    }"#;

    let request = RetentionRequest::from_json(json).unwrap();
    assert_eq!(request.base_folder.as_deref(), Some("/data"));
    assert_eq!(request.pattern_type, Some(PatternType::Regex));
    assert_eq!(request.age, Some(2));
    assert_eq!(request.age_unit, Some(AgeUnit::Months));
    assert_eq!(
        request.folder_removal_mode,
        Some(FolderRemovalMode::Empty)
    );
    assert_eq!(request.dry_run, Some(true));
    assert_eq!(request.report_details, Some(false));
}

#[test]
fn wrong_typed_request_field_is_rejected() {
    let json = r#"{"age": "thirty"}"#;
    let result = RetentionRequest::from_json(json);
    assert!(result.is_err());
}

#[test]
fn unknown_request_fields_are_ignored() {
    let json = r#"{"age": 3, "somethingElse": true}"#;
    let request = RetentionRequest::from_json(json).unwrap();
    assert_eq!(request.age, Some(3));
}
