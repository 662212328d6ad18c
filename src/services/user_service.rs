//! User service for business logic operations.
//!
//! Wraps the user store and turns missing rows into `NotFound` errors.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{UpdateUser, User};
use crate::repositories::{ListQuery, UserSortField, UserStore};

/// User service for handling user-related business logic.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserStore>) -> Self {
        Self { repo }
    }

    /// Gets a user by their ID.
    ///
    /// # Returns
    /// The user if found, or `NotFound` error
    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user", "id", id))
    }

    pub async fn get_user_by_phone(&self, phone: &str) -> AppResult<User> {
        self.repo
            .find_by_phone(phone)
            .await?
            .ok_or_else(|| AppError::not_found("user", "phone", phone))
    }

    /// Lists users with search, sort and pagination.
    ///
    /// # Returns
    /// A tuple of (users, total_count)
    pub async fn list_users(&self, query: &ListQuery<UserSortField>) -> AppResult<(Vec<User>, i64)> {
        self.repo.list(query).await
    }

    /// Updates the user owning `phone`. An empty change set returns the
    /// current record untouched.
    pub async fn update_user(&self, phone: &str, mut changes: UpdateUser) -> AppResult<User> {
        if changes.is_empty() {
            return self.get_user_by_phone(phone).await;
        }

        changes.updated_at = Some(jiff::Timestamp::now().into());
        let user = self
            .repo
            .update_by_phone(phone, changes)
            .await?
            .ok_or_else(|| AppError::not_found("user", "phone", phone))?;

        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    pub async fn delete_user(&self, phone: &str) -> AppResult<()> {
        if !self.repo.delete_by_phone(phone).await? {
            return Err(AppError::not_found("user", "phone", phone));
        }
        tracing::info!(phone = %phone, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::models::tests::sample_user;
    use crate::repositories::SortOrder;
    use crate::repositories::memory::InMemoryUserStore;

    fn service() -> UserService {
        let users = vec![
            {
                let mut u = sample_user(1, "251911000001", Role::Admin);
                u.full_name = "Abebe Kebede".to_string();
                u
            },
            {
                let mut u = sample_user(2, "251911000002", Role::User);
                u.full_name = "Jane Doe".to_string();
                u
            },
            {
                let mut u = sample_user(3, "251911000003", Role::User);
                u.full_name = "Mary Jane".to_string();
                u
            },
        ];
        UserService::new(Arc::new(InMemoryUserStore::with_users(users)))
    }

    #[tokio::test]
    async fn test_list_users_searches_and_sorts() {
        let query = ListQuery::new(1, 10, Some("jane"), Some("fullName"), SortOrder::Asc);
        let (users, total) = service().list_users(&query).await.unwrap();

        assert_eq!(total, 2);
        let names: Vec<_> = users.iter().map(|u| u.full_name.as_str()).collect();
        assert_eq!(names, ["Jane Doe", "Mary Jane"]);
    }

    #[tokio::test]
    async fn test_list_users_pages() {
        let query = ListQuery::new(2, 2, None, Some("phone"), SortOrder::Asc);
        let (users, total) = service().list_users(&query).await.unwrap();

        assert_eq!(total, 3);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].phone, "251911000003");
    }

    #[tokio::test]
    async fn test_update_user_by_phone() {
        let svc = service();
        let updated = svc
            .update_user(
                "251911000002",
                UpdateUser {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.is_active);

        let missing = svc
            .update_user(
                "000",
                UpdateUser {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(missing, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let svc = service();
        svc.delete_user("251911000001").await.unwrap();
        assert!(matches!(
            svc.delete_user("251911000001").await,
            Err(AppError::NotFound { .. })
        ));
    }
}
