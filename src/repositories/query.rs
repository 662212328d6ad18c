//! Database-agnostic list queries.
//!
//! A `ListQuery` captures search, sort and offset pagination for one
//! resource. Repositories translate it into Diesel filters; the in-memory
//! store in tests evaluates the same `SearchFilter` directly.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(alias = "ASC", alias = "Asc")]
    Asc,
    #[default]
    #[serde(alias = "DESC", alias = "Desc")]
    Desc,
}

/// Whitelisted sort columns of one resource.
pub trait SortField: Copy + std::fmt::Debug + Send + Sync {
    /// Parses a client-supplied `sortBy`, `None` when not whitelisted.
    fn parse(name: &str) -> Option<Self>;

    /// The creation timestamp column, used when no valid `sortBy` is given.
    fn created_at() -> Self;
}

/// A non-blank search term matched as a case-insensitive substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    /// Returns `None` for absent or whitespace-only input.
    pub fn new(raw: Option<&str>) -> Option<Self> {
        let term = raw?.trim();
        if term.is_empty() {
            return None;
        }
        Some(Self {
            term: term.to_string(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// `%term%` for `ILIKE`, with `\`, `%` and `_` escaped so the term is
    /// matched literally.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 2);
        pattern.push('%');
        for c in self.term.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// True when the term is a case-insensitive substring of any field.
    pub fn matches<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        let needle = self.term.to_lowercase();
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
    pub field: F,
    pub order: SortOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F> {
    pub search: Option<SearchFilter>,
    pub sort: Sort<F>,
    pub skip: i64,
    pub limit: i64,
}

impl<F: SortField> ListQuery<F> {
    /// Builds the query for a 1-based `page`. An unknown `sort_by` falls back
    /// to the creation timestamp in the requested direction.
    pub fn new(
        page: u32,
        limit: u32,
        search: Option<&str>,
        sort_by: Option<&str>,
        order: SortOrder,
    ) -> Self {
        let field = match sort_by.map(str::trim).filter(|s| !s.is_empty()) {
            Some(name) => F::parse(name).unwrap_or_else(|| {
                tracing::debug!(sort_by = %name, "Unknown sort field, using creation time");
                F::created_at()
            }),
            None => F::created_at(),
        };

        Self {
            search: SearchFilter::new(search),
            sort: Sort { field, order },
            skip: i64::from(page.saturating_sub(1)) * i64::from(limit),
            limit: i64::from(limit),
        }
    }
}

/// Applies `$column` in `$order` direction to a boxed Diesel query, with the
/// primary key as tie breaker so pages stay stable.
macro_rules! order_by {
    ($query:expr, $order:expr, $column:expr, $id:expr) => {
        match $order {
            $crate::repositories::query::SortOrder::Asc => {
                $query.order($column.asc()).then_order_by($id.asc())
            }
            $crate::repositories::query::SortOrder::Desc => {
                $query.order($column.desc()).then_order_by($id.desc())
            }
        }
    };
}

pub(crate) use order_by;
