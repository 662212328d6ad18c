//! In-memory `UserStore` for service and router tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::query::{ListQuery, SortOrder};
use crate::repositories::user_repo::{UserSortField, UserStore};

/// Emulates the users table including its unique email and phone indexes.
#[derive(Default)]
pub struct InMemoryUserStore {
    rows: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            rows: Mutex::new(users),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn duplicate(field: &str, value: &str) -> AppError {
        AppError::Duplicate {
            entity: "users".to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.phone == new_user.phone) {
            return Err(Self::duplicate("phone", &new_user.phone));
        }
        if rows.iter().any(|u| u.email == new_user.email) {
            return Err(Self::duplicate("email", &new_user.email));
        }

        let now = jiff::Timestamp::now();
        let user = User {
            id: rows.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            full_name: new_user.full_name,
            email: new_user.email,
            phone: new_user.phone,
            password: new_user.password,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: now.into(),
            updated_at: now.into(),
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.phone == phone).cloned())
    }

    async fn list(&self, query: &ListQuery<UserSortField>) -> Result<(Vec<User>, i64), AppError> {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<User> = rows
            .iter()
            .filter(|u| match &query.search {
                Some(filter) => {
                    filter.matches([u.full_name.as_str(), u.email.as_str(), u.phone.as_str()])
                }
                None => true,
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            let ordering = match query.sort.field {
                UserSortField::CreatedAt => a.created_at.to_jiff().cmp(&b.created_at.to_jiff()),
                UserSortField::FullName => a.full_name.cmp(&b.full_name),
                UserSortField::Email => a.email.cmp(&b.email),
                UserSortField::Phone => a.phone.cmp(&b.phone),
            }
            .then(a.id.cmp(&b.id));
            match query.sort.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(query.skip as usize)
            .take(query.limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn update_by_phone(
        &self,
        phone: &str,
        changes: UpdateUser,
    ) -> Result<Option<User>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(email) = &changes.email
            && rows.iter().any(|u| &u.email == email && u.phone != phone)
        {
            return Err(Self::duplicate("email", email));
        }

        let Some(user) = rows.iter_mut().find(|u| u.phone == phone) else {
            return Ok(None);
        };
        if let Some(full_name) = changes.full_name {
            user.full_name = full_name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(is_active) = changes.is_active {
            user.is_active = is_active;
        }
        if let Some(updated_at) = changes.updated_at {
            user.updated_at = updated_at;
        }
        Ok(Some(user.clone()))
    }

    async fn delete_by_phone(&self, phone: &str) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.phone != phone);
        Ok(rows.len() < before)
    }
}
