//! Donation repository for async database operations.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Donation, NewDonation};
use crate::repositories::query::{ListQuery, SearchFilter, SortField, order_by};
use crate::schema::donations;

/// Sortable donation columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationSortField {
    CreatedAt,
    FullName,
    Amount,
}

impl SortField for DonationSortField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "createdAt" | "created_at" => Some(Self::CreatedAt),
            "fullName" | "full_name" => Some(Self::FullName),
            "amount" => Some(Self::Amount),
            _ => None,
        }
    }

    fn created_at() -> Self {
        Self::CreatedAt
    }
}

#[derive(Clone)]
pub struct DonationRepository {
    pool: AsyncDbPool,
}

impl DonationRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    fn filtered(search: Option<&SearchFilter>) -> donations::BoxedQuery<'static, Pg> {
        let mut query = donations::table.into_boxed();
        if let Some(filter) = search {
            let pattern = filter.like_pattern();
            query = query.filter(
                donations::full_name
                    .ilike(pattern.clone())
                    .or(donations::phone_number.ilike(pattern)),
            );
        }
        query
    }

    pub async fn create(&self, new_donation: NewDonation) -> Result<Donation, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(donations::table)
            .values(&new_donation)
            .returning(Donation::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// One page of `filtered`, ordered by the requested column with `id` as
    /// tie breaker.
    fn page(query: &ListQuery<DonationSortField>) -> donations::BoxedQuery<'static, Pg> {
        let base = Self::filtered(query.search.as_ref());
        let order = query.sort.order;
        let ordered = match query.sort.field {
            DonationSortField::CreatedAt => {
                order_by!(base, order, donations::created_at, donations::id)
            }
            DonationSortField::FullName => {
                order_by!(base, order, donations::full_name, donations::id)
            }
            DonationSortField::Amount => order_by!(base, order, donations::amount, donations::id),
        };
        ordered.offset(query.skip).limit(query.limit)
    }

    pub async fn list(
        &self,
        query: &ListQuery<DonationSortField>,
    ) -> Result<(Vec<Donation>, i64), AppError> {
        let mut conn = self.pool.get().await?;

        let items = Self::page(query)
            .select(Donation::as_select())
            .load(&mut conn)
            .await?;

        let total = Self::filtered(query.search.as_ref())
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        Ok((items, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SortOrder;

    fn page_sql(query: &ListQuery<DonationSortField>) -> String {
        diesel::debug_query::<Pg, _>(&DonationRepository::page(query)).to_string()
    }

    #[test]
    fn test_default_page_is_newest_first() {
        let query = ListQuery::<DonationSortField>::new(1, 10, None, None, SortOrder::Desc);
        let sql = page_sql(&query);
        assert!(sql.contains(r#"ORDER BY "donations"."created_at" DESC, "donations"."id" DESC"#));
        assert!(!sql.contains("ILIKE"));
    }

    #[test]
    fn test_page_window_and_amount_sort() {
        let query = ListQuery::<DonationSortField>::new(
            3,
            20,
            Some("abebe"),
            Some("amount"),
            SortOrder::Asc,
        );
        let sql = page_sql(&query);
        assert!(sql.contains(r#"ORDER BY "donations"."amount" ASC, "donations"."id" ASC"#));
        assert!(sql.contains("LIMIT"));
        assert!(sql.contains("OFFSET"));
        assert!(sql.contains("%abebe%"));
        assert!(sql.contains("20, 40]"));
    }

    #[test]
    fn test_unknown_sort_falls_back_to_created_at() {
        let query =
            ListQuery::<DonationSortField>::new(1, 10, None, Some("phone_number"), SortOrder::Asc);
        assert!(page_sql(&query).contains(r#"ORDER BY "donations"."created_at" ASC"#));
    }
}
