use crate::ApiError;
use crate::api::validation::{
    double_option, optional_date, optional_enum, optional_text, parse_enum, parse_path_id,
    required_date, required_text,
};

use pms_core::{ProjectStatus, TaskPriority};

use chrono::{TimeZone, Utc};
use serde::Deserialize;

fn field_of(err: ApiError) -> Option<String> {
    match err {
        ApiError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_required_text_trims() {
    let value = required_text(Some("  Apollo  ".into()), "name").unwrap();
    assert_eq!(value, "Apollo");
}

#[test]
fn test_required_text_rejects_missing_and_blank() {
    let missing = required_text(None, "name").unwrap_err();
    assert_eq!(field_of(missing).as_deref(), Some("name"));

    let blank = required_text(Some("   ".into()), "sprintName").unwrap_err();
    assert_eq!(field_of(blank).as_deref(), Some("sprintName"));
}

#[test]
fn test_optional_text_drops_blank() {
    assert_eq!(optional_text(Some(" ".into())), None);
    assert_eq!(optional_text(Some(" x ".into())), Some("x".to_string()));
    assert_eq!(optional_text(None), None);
}

#[test]
fn test_parse_path_id_names_entity() {
    let err = parse_path_id("123", "daily task").unwrap_err();
    assert!(err.to_string().contains("Invalid daily task ID format"));
}

#[test]
fn test_required_date_accepts_calendar_date() {
    let date = required_date(Some("2025-03-01".into()), "startDate").unwrap();
    assert_eq!(date, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
}

#[test]
fn test_optional_date_reports_field() {
    let err = optional_date(Some("yesterday".into()), "endDate").unwrap_err();
    assert_eq!(field_of(err).as_deref(), Some("endDate"));
}

#[test]
fn test_parse_enum_attaches_field() {
    let status: ProjectStatus = parse_enum("On Hold", "status").unwrap();
    assert_eq!(status, ProjectStatus::OnHold);

    let err = parse_enum::<TaskPriority>("Urgent", "priority").unwrap_err();
    assert_eq!(field_of(err).as_deref(), Some("priority"));
}

#[test]
fn test_optional_enum_absent_is_none() {
    let priority = optional_enum::<TaskPriority>(None, "priority").unwrap();
    assert_eq!(priority, None);
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Patch {
    #[serde(default, deserialize_with = "double_option")]
    sprint_id: Option<Option<String>>,
}

#[test]
fn test_double_option_distinguishes_null_from_absent() {
    let absent: Patch = serde_json::from_str("{}").unwrap();
    assert_eq!(absent.sprint_id, None);

    let null: Patch = serde_json::from_str(r#"{"sprintId": null}"#).unwrap();
    assert_eq!(null.sprint_id, Some(None));

    let set: Patch = serde_json::from_str(r#"{"sprintId": "abc"}"#).unwrap();
    assert_eq!(set.sprint_id, Some(Some("abc".to_string())));
}
