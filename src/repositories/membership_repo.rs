//! Membership repository for async database operations.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Membership, NewMembership};
use crate::repositories::query::{ListQuery, SearchFilter, SortField, order_by};
use crate::schema::memberships;

/// Sortable membership columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipSortField {
    CreatedAt,
    FullName,
    Email,
    PhoneNumber,
}

impl SortField for MembershipSortField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "createdAt" | "created_at" => Some(Self::CreatedAt),
            "fullName" | "full_name" => Some(Self::FullName),
            "email" => Some(Self::Email),
            "phoneNumber" | "phone_number" => Some(Self::PhoneNumber),
            _ => None,
        }
    }

    fn created_at() -> Self {
        Self::CreatedAt
    }
}

#[derive(Clone)]
pub struct MembershipRepository {
    pool: AsyncDbPool,
}

impl MembershipRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Memberships matching `search` on full name, email, phone number or Fayda id.
    fn filtered(search: Option<&SearchFilter>) -> memberships::BoxedQuery<'static, Pg> {
        let mut query = memberships::table.into_boxed();
        if let Some(filter) = search {
            let pattern = filter.like_pattern();
            query = query.filter(
                memberships::full_name
                    .ilike(pattern.clone())
                    .or(memberships::email.ilike(pattern.clone()))
                    .or(memberships::phone_number.ilike(pattern.clone()))
                    .or(memberships::fayda_id.ilike(pattern)),
            );
        }
        query
    }

    /// Stores a membership application.
    ///
    /// An unknown `membership_level_id` surfaces as a foreign key
    /// `AppError::Validation`.
    pub async fn create(&self, new_membership: NewMembership) -> Result<Membership, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(memberships::table)
            .values(&new_membership)
            .returning(Membership::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list(
        &self,
        query: &ListQuery<MembershipSortField>,
    ) -> Result<(Vec<Membership>, i64), AppError> {
        let mut conn = self.pool.get().await?;
        let search = query.search.as_ref();
        let order = query.sort.order;

        let base = Self::filtered(search);
        let ordered = match query.sort.field {
            MembershipSortField::CreatedAt => {
                order_by!(base, order, memberships::created_at, memberships::id)
            }
            MembershipSortField::FullName => {
                order_by!(base, order, memberships::full_name, memberships::id)
            }
            MembershipSortField::Email => {
                order_by!(base, order, memberships::email, memberships::id)
            }
            MembershipSortField::PhoneNumber => {
                order_by!(base, order, memberships::phone_number, memberships::id)
            }
        };

        let items = ordered
            .offset(query.skip)
            .limit(query.limit)
            .select(Membership::as_select())
            .load(&mut conn)
            .await?;

        let total = Self::filtered(search)
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        Ok((items, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_whitelist() {
        assert_eq!(
            MembershipSortField::parse("phoneNumber"),
            Some(MembershipSortField::PhoneNumber)
        );
        assert_eq!(MembershipSortField::parse("faydaId"), None);
    }

    #[test]
    fn test_search_covers_fayda_id() {
        let filter = SearchFilter::new(Some("FAY-1"));
        let sql = diesel::debug_query::<Pg, _>(&MembershipRepository::filtered(filter.as_ref()))
            .to_string();
        assert!(sql.contains("\"fayda_id\" ILIKE"));
    }
}
