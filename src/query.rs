use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::User;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Query parameters for the user listing.
///
/// `page` and `limit` are kept as raw strings so that non-numeric or
/// non-positive values silently fall back to the defaults instead of failing
/// extraction with a 400.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Case-insensitive substring matched against name and email
    pub search: Option<String>,
    /// 1-based page number, defaults to 1
    pub page: Option<String>,
    /// Page size, defaults to 10
    pub limit: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> u64 {
        parse_or_default(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        parse_or_default(self.limit.as_deref(), DEFAULT_LIMIT)
    }
}

fn parse_or_default(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|&value| value > 0)
        .unwrap_or(default)
}

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct Pagination {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// Applies the optional search filter and page/limit slicing to a snapshot of
/// the store. Out-of-range pages yield an empty page with correct totals.
pub fn select_page(users: &[User], query: &ListQuery) -> (Vec<User>, Pagination) {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_lowercase();

    let filtered: Vec<&User> = if needle.is_empty() {
        users.iter().collect()
    } else {
        users
            .iter()
            .filter(|user| {
                user.name.to_lowercase().contains(&needle)
                    || user.email.to_lowercase().contains(&needle)
            })
            .collect()
    };

    let page = query.page();
    let limit = query.limit();
    let total = filtered.len() as u64;
    let start = (page - 1).saturating_mul(limit);

    let users_page = filtered
        .into_iter()
        .skip(usize::try_from(start).unwrap_or(usize::MAX))
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .cloned()
        .collect();

    (
        users_page,
        Pagination {
            current_page: page,
            per_page: limit,
            total,
            total_pages: total.div_ceil(limit),
        },
    )
}
