//! Pagination-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::repositories::{ListQuery, SortField, SortOrder};

pub const MAX_PAGE_LIMIT: u32 = 100;

/// Query parameters shared by every paginated list endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationRequest {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[param(minimum = 1, example = 1)]
    pub page: u32,

    /// Number of items per page (max 100)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100, example = 10)]
    pub limit: u32,

    /// Case-insensitive substring matched against the resource's text fields
    #[param(example = "jane")]
    pub search: Option<String>,

    /// Field to sort by; unknown fields fall back to creation time
    #[param(example = "createdAt")]
    pub sort_by: Option<String>,

    #[serde(default)]
    #[param(inline)]
    pub sort_order: SortOrder,
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
            sort_by: None,
            sort_order: SortOrder::default(),
        }
    }
}

impl PaginationRequest {
    /// Translates the request into a storage-agnostic list query.
    pub fn query<F: SortField>(&self) -> ListQuery<F> {
        ListQuery::new(
            self.page,
            self.limit,
            self.search.as_deref(),
            self.sort_by.as_deref(),
            self.sort_order,
        )
    }
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

/// Generic paged response wrapper.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationResponse<T> {
    /// The data items for this page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,

    pub success: bool,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (1-based)
    #[schema(example = 1)]
    pub page: u32,

    /// Number of items per page
    #[schema(example = 10)]
    pub limit: u32,

    /// Total number of matching items across all pages
    #[schema(example = 15)]
    pub total: u64,

    /// `ceil(total / limit)`, zero when nothing matched
    #[schema(example = 2)]
    pub total_pages: u64,

    #[schema(example = true)]
    pub has_next: bool,

    #[schema(example = false)]
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: u64::from(page) < total_pages,
            has_prev: page > 1,
        }
    }
}

impl<T> PaginationResponse<T> {
    /// Wraps one page of results. A negative count from storage is treated as zero.
    pub fn new(data: Vec<T>, params: &PaginationRequest, total: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(
                params.page,
                params.limit,
                u64::try_from(total).unwrap_or(0),
            ),
            success: true,
        }
    }

    /// Converts every item, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginationResponse<U> {
        PaginationResponse {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
            success: self.success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::UserSortField;
    use proptest::prelude::*;

    fn request(page: u32, limit: u32) -> PaginationRequest {
        PaginationRequest {
            page,
            limit,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_result() {
        let meta = PaginationMeta::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_second_of_two_pages() {
        let response = PaginationResponse::new(vec![(); 5], &request(2, 10), 15);
        assert_eq!(
            response.pagination,
            PaginationMeta {
                page: 2,
                limit: 10,
                total: 15,
                total_pages: 2,
                has_next: false,
                has_prev: true,
            }
        );
        assert!(response.success);
    }

    #[test]
    fn test_serializes_camel_case() {
        let response = PaginationResponse::new(vec![1, 2], &request(1, 2), 3);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["pagination"]["totalPages"], 2);
        assert_eq!(json["pagination"]["hasNext"], true);
        assert_eq!(json["pagination"]["hasPrev"], false);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_query_string_defaults() {
        let params: PaginationRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.sort_order, SortOrder::Desc);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert!(request(0, 10).validate().is_err());
        assert!(request(1, 0).validate().is_err());
        assert!(request(1, MAX_PAGE_LIMIT + 1).validate().is_err());
        assert!(request(1, MAX_PAGE_LIMIT).validate().is_ok());
    }

    #[test]
    fn test_query_translation() {
        let params = PaginationRequest {
            page: 2,
            limit: 10,
            search: Some("jane".to_string()),
            sort_by: Some("email".to_string()),
            sort_order: SortOrder::Asc,
        };
        let query = params.query::<UserSortField>();
        assert_eq!(query.skip, 10);
        assert_eq!(query.sort.field, UserSortField::Email);
        assert_eq!(query.search.unwrap().term(), "jane");
    }

    proptest! {
        #[test]
        fn prop_meta_invariants(page in 1u32..500, limit in 1u32..=100, total in 0u64..100_000) {
            let meta = PaginationMeta::new(page, limit, total);

            prop_assert_eq!(meta.total_pages, (total + u64::from(limit) - 1) / u64::from(limit));
            prop_assert_eq!(meta.has_next, u64::from(page) < meta.total_pages);
            prop_assert_eq!(meta.has_prev, page > 1);
            if total == 0 {
                prop_assert_eq!(meta.total_pages, 0);
                prop_assert!(!meta.has_next);
            }
        }

        #[test]
        fn prop_shaping_is_idempotent(page in 1u32..50, limit in 1u32..=100, total in 0i64..10_000) {
            let params = request(page, limit);
            let first = PaginationResponse::new(Vec::<u8>::new(), &params, total);
            let second = PaginationResponse::new(Vec::<u8>::new(), &params, total);
            prop_assert_eq!(first.pagination, second.pagination);
        }
    }
}
