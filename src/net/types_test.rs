use super::*;

// =============================================================
// Role / Status wire format
// =============================================================

#[test]
fn role_serializes_upper_case() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
}

#[test]
fn status_round_trips_upper_case() {
    let s: Status = serde_json::from_str("\"INACTIVE\"").unwrap();
    assert_eq!(s, Status::Inactive);
    assert_eq!(serde_json::to_string(&s).unwrap(), "\"INACTIVE\"");
}

#[test]
fn status_toggled_flips_both_ways() {
    assert_eq!(Status::Active.toggled(), Status::Inactive);
    assert_eq!(Status::Inactive.toggled(), Status::Active);
}

// =============================================================
// User decoding
// =============================================================

#[test]
fn user_decodes_without_optional_fields() {
    let json = serde_json::json!({
        "id": 7,
        "username": "linh",
        "email": "linh@example.com",
        "phone_number": "0901234567",
        "role": "USER",
        "status": "ACTIVE"
    });
    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user.id, 7);
    assert!(user.preferences.is_none());
    assert!(user.created_at.is_none());
}

#[test]
fn user_decodes_preferences() {
    let json = serde_json::json!({
        "id": 1,
        "username": "admin",
        "email": "admin@example.com",
        "phone_number": "",
        "role": "ADMIN",
        "status": "ACTIVE",
        "preferences": { "language": "vi", "notification_enabled": true }
    });
    let user: User = serde_json::from_value(json).unwrap();
    let prefs = user.preferences.expect("preferences");
    assert_eq!(prefs.language, "vi");
    assert!(prefs.notification_enabled);
}

#[test]
fn draft_omits_missing_password() {
    let draft = UserDraft {
        username: "linh".to_owned(),
        ..UserDraft::default()
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert!(json.get("password").is_none());
}

#[test]
fn paginated_uses_camel_case_page_size() {
    let json = serde_json::json!({
        "items": [],
        "total": 0,
        "page": 1,
        "pageSize": 10
    });
    let page: Paginated<User> = serde_json::from_value(json).unwrap();
    assert_eq!(page.page_size, 10);
}
