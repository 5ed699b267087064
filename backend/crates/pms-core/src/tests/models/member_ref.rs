use crate::MemberRef;

use uuid::Uuid;

#[test]
fn test_member_ref_serializes_camel_case_and_skips_none() {
    let id = Uuid::new_v4();
    let mut member = MemberRef::new(id);
    member.employee_code = Some("EMP042".to_string());

    let value = serde_json::to_value(&member).unwrap();
    assert_eq!(value["userId"], id.to_string());
    assert_eq!(value["employeeCode"], "EMP042");
    assert!(value.get("name").is_none());
    assert!(value.get("role").is_none());
}

#[test]
fn test_member_ref_deserializes_minimal_snapshot() {
    let id = Uuid::new_v4();
    let json = format!(r#"{{"userId":"{id}"}}"#);

    let member: MemberRef = serde_json::from_str(&json).unwrap();
    assert_eq!(member, MemberRef::new(id));
}
