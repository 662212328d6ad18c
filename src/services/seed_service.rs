//! Startup seeding of the admin account and default membership levels.

use std::sync::Arc;

use bigdecimal::BigDecimal;
use futures::future::join_all;

use crate::config::SeedConfig;
use crate::error::AppResult;
use crate::models::{NewMembershipLevel, NewUser, Role};
use crate::repositories::{MembershipLevelRepository, UserStore};
use crate::utils::password::hash_password;

/// Levels every installation starts with, as `(id, name, monthly price)`.
const DEFAULT_LEVELS: [(i32, &str, i64); 4] = [
    (1, "Basic", 1000),
    (2, "Standard", 2500),
    (3, "Premium", 5000),
    (4, "Enterprise", 10000),
];

pub fn default_levels() -> Vec<NewMembershipLevel> {
    DEFAULT_LEVELS
        .iter()
        .map(|&(id, name, price)| NewMembershipLevel {
            id,
            name: name.to_string(),
            price: BigDecimal::from(price),
            frequency: "monthly".to_string(),
        })
        .collect()
}

#[derive(Clone)]
pub struct SeedService {
    users: Arc<dyn UserStore>,
    levels: MembershipLevelRepository,
}

impl SeedService {
    pub fn new(users: Arc<dyn UserStore>, levels: MembershipLevelRepository) -> Self {
        Self { users, levels }
    }

    /// Seeds the admin user and default levels. Failures are logged and
    /// never abort startup.
    pub async fn run(&self, config: &SeedConfig) {
        if !config.enabled {
            tracing::debug!("Seeding disabled");
            return;
        }

        match self.seed_admin(config).await {
            Ok(true) => tracing::info!(email = %config.admin_email, "Seeded admin user"),
            Ok(false) => tracing::debug!(email = %config.admin_email, "Admin user already present"),
            Err(e) => tracing::error!(error = %e, "Failed to seed admin user"),
        }

        self.seed_levels().await;
    }

    /// Creates the configured admin unless a user with that email exists.
    async fn seed_admin(&self, config: &SeedConfig) -> AppResult<bool> {
        if self.users.find_by_email(&config.admin_email).await?.is_some() {
            return Ok(false);
        }

        self.users
            .create(NewUser {
                full_name: config.admin_full_name.clone(),
                email: config.admin_email.clone(),
                phone: config.admin_phone.clone(),
                password: hash_password(&config.admin_password)?,
                role: Role::Admin,
                is_active: true,
            })
            .await?;
        Ok(true)
    }

    async fn seed_levels(&self) {
        let levels = default_levels();
        let results = join_all(levels.iter().map(|level| self.levels.insert_if_missing(level))).await;

        for (level, result) in levels.iter().zip(results) {
            match result {
                Ok(true) => tracing::info!(level_id = level.id, name = %level.name, "Seeded membership level"),
                Ok(false) => {}
                Err(e) => tracing::error!(level_id = level.id, error = %e, "Failed to seed membership level"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        let levels = default_levels();
        let summary: Vec<_> = levels
            .iter()
            .map(|l| (l.id, l.name.as_str(), l.price.to_string()))
            .collect();

        assert_eq!(
            summary,
            [
                (1, "Basic", "1000".to_string()),
                (2, "Standard", "2500".to_string()),
                (3, "Premium", "5000".to_string()),
                (4, "Enterprise", "10000".to_string()),
            ]
        );
        assert!(levels.iter().all(|l| l.frequency == "monthly"));
    }

    #[tokio::test]
    async fn test_seed_admin_is_idempotent() {
        use crate::repositories::memory::InMemoryUserStore;
        use diesel_async::pooled_connection::AsyncDieselConnectionManager;
        use diesel_async::pooled_connection::bb8::Pool;

        let pool = Pool::builder().build_unchecked(AsyncDieselConnectionManager::new(
            "postgres://localhost/eyea_test",
        ));
        let store = Arc::new(InMemoryUserStore::new());
        let seeder = SeedService::new(store.clone(), MembershipLevelRepository::new(pool));
        let config = SeedConfig {
            enabled: true,
            admin_email: "admin@eyea.org".to_string(),
            admin_password: "admin-password".to_string(),
            admin_phone: "251900000000".to_string(),
            admin_full_name: "EYEA Admin".to_string(),
        };

        assert!(seeder.seed_admin(&config).await.unwrap());
        assert!(!seeder.seed_admin(&config).await.unwrap());

        let admin = store.find_by_email("admin@eyea.org").await.unwrap().unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(store.len(), 1);
    }
}
