use super::*;

#[test]
fn default_query_has_first_page_of_ten() {
    let q = ListQuery::default();
    assert_eq!(q.to_query_string(), "page=1&pageSize=10");
}

#[test]
fn query_includes_trimmed_search() {
    let q = ListQuery {
        search: Some("  linh  ".to_owned()),
        ..ListQuery::default()
    };
    assert_eq!(q.to_query_string(), "page=1&pageSize=10&search=linh");
}

#[test]
fn blank_search_is_omitted() {
    let q = ListQuery {
        search: Some("   ".to_owned()),
        ..ListQuery::default()
    };
    assert_eq!(q.to_query_string(), "page=1&pageSize=10");
}

#[test]
fn search_is_percent_encoded() {
    let q = ListQuery {
        search: Some("a b&c".to_owned()),
        ..ListQuery::default()
    };
    assert_eq!(q.to_query_string(), "page=1&pageSize=10&search=a%20b%26c");
}

#[test]
fn unicode_search_is_utf8_percent_encoded() {
    let q = ListQuery {
        search: Some("Đặng".to_owned()),
        ..ListQuery::default()
    };
    assert_eq!(
        q.to_query_string(),
        "page=1&pageSize=10&search=%C4%90%E1%BA%B7ng"
    );
}

#[test]
fn filters_append_upper_case_values() {
    let q = ListQuery {
        page: 3,
        page_size: 25,
        search: None,
        role: Some(Role::Admin),
        status: Some(Status::Inactive),
    };
    assert_eq!(
        q.to_query_string(),
        "page=3&pageSize=25&role=ADMIN&status=INACTIVE"
    );
}
