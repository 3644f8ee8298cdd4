use super::*;

fn user(id: i64) -> User {
    User {
        id,
        username: format!("user-{id}"),
        email: format!("user-{id}@example.com"),
        phone_number: String::new(),
        role: Role::User,
        status: Status::Active,
        preferences: None,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Defaults and query derivation
// =============================================================

#[test]
fn default_state_is_empty_first_page() {
    let s = UsersState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert_eq!(s.page, 1);
    assert_eq!(s.page_size, 10);
    assert_eq!(s.page_count(), 1);
}

#[test]
fn query_omits_blank_search() {
    let mut s = UsersState::default();
    s.set_search("   ".to_owned());
    assert!(s.query().search.is_none());

    s.set_search("linh".to_owned());
    assert_eq!(s.query().search.as_deref(), Some("linh"));
}

#[test]
fn query_carries_filters() {
    let mut s = UsersState::default();
    s.set_role_filter(Some(Role::Admin));
    s.set_status_filter(Some(Status::Inactive));
    let q = s.query();
    assert_eq!(q.role, Some(Role::Admin));
    assert_eq!(q.status, Some(Status::Inactive));
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_count_rounds_up() {
    let mut s = UsersState::default();
    s.total = 21;
    assert_eq!(s.page_count(), 3);
    s.total = 20;
    assert_eq!(s.page_count(), 2);
}

#[test]
fn set_page_clamps_to_range() {
    let mut s = UsersState::default();
    s.total = 25;
    s.set_page(99);
    assert_eq!(s.page, 3);
    s.set_page(0);
    assert_eq!(s.page, 1);
}

#[test]
fn changing_filters_resets_to_first_page() {
    let mut s = UsersState::default();
    s.total = 100;
    s.set_page(5);
    s.set_search("x".to_owned());
    assert_eq!(s.page, 1);

    s.set_page(5);
    s.set_role_filter(Some(Role::User));
    assert_eq!(s.page, 1);

    s.set_page(5);
    s.clear_filters();
    assert_eq!(s.page, 1);
    assert!(s.search.is_empty());
    assert!(s.role_filter.is_none());
    assert!(s.status_filter.is_none());
}

// =============================================================
// Fetch outcomes
// =============================================================

#[test]
fn apply_page_replaces_items_and_total() {
    let mut s = UsersState::default();
    s.loading = true;
    s.apply_page(Paginated {
        items: vec![user(1), user(2)],
        total: 12,
        page: 1,
        page_size: 10,
    });
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.total, 12);
    assert!(!s.loading);
}

#[test]
fn apply_failure_clears_loading_but_keeps_items() {
    let mut s = UsersState::default();
    s.apply_page(Paginated {
        items: vec![user(1)],
        total: 1,
        page: 1,
        page_size: 10,
    });
    s.loading = true;
    s.apply_failure();
    assert!(!s.loading);
    assert_eq!(s.items.len(), 1);
}
