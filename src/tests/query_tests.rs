use chrono::Utc;

use crate::models::User;
use crate::query::{self, ListQuery, Pagination};
use crate::tests::create_seeded_service;

fn user(id: u64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn listing(page: Option<&str>, limit: Option<&str>, search: Option<&str>) -> ListQuery {
    ListQuery {
        search: search.map(String::from),
        page: page.map(String::from),
        limit: limit.map(String::from),
    }
}

#[tokio::test]
async fn seeded_page_two_limit_two_returns_users_three_and_four() {
    let service = create_seeded_service();
    let (users, pagination) = service
        .list_users(&listing(Some("2"), Some("2"), None))
        .await
        .unwrap();

    let ids: Vec<u64> = users.iter().map(|user| user.id).collect();
    assert_eq!(ids, [3, 4]);
    assert_eq!(
        pagination,
        Pagination {
            current_page: 2,
            per_page: 2,
            total: 5,
            total_pages: 3,
        }
    );
}

#[test]
fn out_of_range_page_is_empty_with_correct_totals() {
    let users: Vec<User> = (1..=5)
        .map(|id| user(id, &format!("User {id}"), &format!("user{id}@example.com")))
        .collect();
    let (page, pagination) = query::select_page(&users, &listing(Some("4"), Some("2"), None));
    assert!(page.is_empty());
    assert_eq!(pagination.total, 5);
    assert_eq!(pagination.total_pages, 3);
}

#[test]
fn search_is_case_insensitive_over_name_and_email() {
    let users = vec![
        user(1, "John Doe", "john@example.com"),
        user(2, "Jane Smith", "jane@example.com"),
        user(3, "Bob Johnson", "bob@other.org"),
    ];

    let (by_name, _) = query::select_page(&users, &listing(None, None, Some("JOHN")));
    let ids: Vec<u64> = by_name.iter().map(|user| user.id).collect();
    // matches "John Doe" by name, "john@example.com" by email, "Bob Johnson" by name
    assert_eq!(ids, [1, 3]);

    let (by_email, _) = query::select_page(&users, &listing(None, None, Some("other.org")));
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].id, 3);
}

#[test]
fn empty_search_is_identity() {
    let users = vec![user(1, "John Doe", "john@example.com")];
    let (all, pagination) = query::select_page(&users, &listing(None, None, Some("  ")));
    assert_eq!(all.len(), 1);
    assert_eq!(pagination.total, 1);
}

#[test]
fn invalid_page_and_limit_fall_back_to_defaults() {
    let users: Vec<User> = (1..=15)
        .map(|id| user(id, &format!("User {id}"), &format!("user{id}@example.com")))
        .collect();

    for (page, limit) in [
        (Some("abc"), Some("xyz")),
        (Some("0"), Some("-3")),
        (None, None),
    ] {
        let (first_page, pagination) = query::select_page(&users, &listing(page, limit, None));
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.per_page, 10);
        assert_eq!(first_page.len(), 10);
        assert_eq!(pagination.total_pages, 2);
    }
}

#[test]
fn no_matches_means_zero_pages() {
    let users = vec![user(1, "John Doe", "john@example.com")];
    let (page, pagination) = query::select_page(&users, &listing(None, None, Some("nobody")));
    assert!(page.is_empty());
    assert_eq!(pagination.total, 0);
    assert_eq!(pagination.total_pages, 0);
}
