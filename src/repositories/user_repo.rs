//! User repository for async database operations.
//!
//! Provides CRUD and paginated listing for the users table using diesel_async.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::query::{ListQuery, SearchFilter, SortField, order_by};
use crate::schema::users;

/// Sortable user columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    CreatedAt,
    FullName,
    Email,
    Phone,
}

impl SortField for UserSortField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "createdAt" | "created_at" => Some(Self::CreatedAt),
            "fullName" | "full_name" => Some(Self::FullName),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }

    fn created_at() -> Self {
        Self::CreatedAt
    }
}

/// Persistence operations the services need on users.
///
/// Implemented by `UserRepository` against PostgreSQL; tests substitute an
/// in-memory store with the same uniqueness behaviour.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a user. A taken email or phone yields `AppError::Duplicate`.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError>;

    /// One page of users plus the total number matching the search.
    async fn list(&self, query: &ListQuery<UserSortField>) -> Result<(Vec<User>, i64), AppError>;

    /// Applies `changes` to the user with `phone`, `None` when absent.
    async fn update_by_phone(
        &self,
        phone: &str,
        changes: UpdateUser,
    ) -> Result<Option<User>, AppError>;

    /// Deletes the user with `phone`, returning whether a row was removed.
    async fn delete_by_phone(&self, phone: &str) -> Result<bool, AppError>;
}

/// User repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Users matching `search` on full name, email or phone.
    fn filtered(search: Option<&SearchFilter>) -> users::BoxedQuery<'static, Pg> {
        let mut query = users::table.into_boxed();
        if let Some(filter) = search {
            let pattern = filter.like_pattern();
            query = query.filter(
                users::full_name
                    .ilike(pattern.clone())
                    .or(users::email.ilike(pattern.clone()))
                    .or(users::phone.ilike(pattern)),
            );
        }
        query
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let mut conn = self.pool.get().await?;

        users::table
            .filter(users::id.eq(user_id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let mut conn = self.pool.get().await?;

        users::table
            .filter(users::email.eq(email))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError> {
        let mut conn = self.pool.get().await?;

        users::table
            .filter(users::phone.eq(phone))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list(&self, query: &ListQuery<UserSortField>) -> Result<(Vec<User>, i64), AppError> {
        let mut conn = self.pool.get().await?;
        let search = query.search.as_ref();

        let base = Self::filtered(search);
        let ordered = match query.sort.field {
            UserSortField::CreatedAt => {
                order_by!(base, query.sort.order, users::created_at, users::id)
            }
            UserSortField::FullName => {
                order_by!(base, query.sort.order, users::full_name, users::id)
            }
            UserSortField::Email => order_by!(base, query.sort.order, users::email, users::id),
            UserSortField::Phone => order_by!(base, query.sort.order, users::phone, users::id),
        };

        let items = ordered
            .offset(query.skip)
            .limit(query.limit)
            .select(User::as_select())
            .load(&mut conn)
            .await?;

        let total = Self::filtered(search)
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        Ok((items, total))
    }

    async fn update_by_phone(
        &self,
        phone: &str,
        changes: UpdateUser,
    ) -> Result<Option<User>, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::update(users::table.filter(users::phone.eq(phone)))
            .set(&changes)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn delete_by_phone(&self, phone: &str) -> Result<bool, AppError> {
        let mut conn = self.pool.get().await?;

        let affected = diesel::delete(users::table.filter(users::phone.eq(phone)))
            .execute(&mut conn)
            .await?;

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_accepts_both_casings() {
        assert_eq!(
            UserSortField::parse("fullName"),
            Some(UserSortField::FullName)
        );
        assert_eq!(
            UserSortField::parse("created_at"),
            Some(UserSortField::CreatedAt)
        );
        assert_eq!(UserSortField::parse("password"), None);
    }

    #[test]
    fn test_search_query_renders_ilike() {
        let filter = SearchFilter::new(Some("jane"));
        let sql = diesel::debug_query::<Pg, _>(&UserRepository::filtered(filter.as_ref()))
            .to_string();
        assert!(sql.contains("ILIKE"));
        assert!(sql.contains("%jane%"));
    }
}
