//! Repository layer for data access operations.
//!
//! Provides async CRUD and paginated listing for all domain entities.

mod donation_repo;
mod membership_level_repo;
mod membership_repo;
#[cfg(test)]
pub(crate) mod memory;
mod payment_repo;
pub mod query;
mod user_repo;

use std::sync::Arc;

pub use donation_repo::{DonationRepository, DonationSortField};
pub use membership_level_repo::MembershipLevelRepository;
pub use membership_repo::{MembershipRepository, MembershipSortField};
pub use payment_repo::PaymentRepository;
pub use query::{ListQuery, SearchFilter, Sort, SortField, SortOrder};
pub use user_repo::{UserRepository, UserSortField, UserStore};

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Cloning is cheap: the pool and the user store are reference counted.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserStore>,
    pub memberships: MembershipRepository,
    pub membership_levels: MembershipLevelRepository,
    pub donations: DonationRepository,
    pub payments: PaymentRepository,
}

impl Repositories {
    /// Creates a new Repositories instance backed by PostgreSQL.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self::with_user_store(pool.clone(), Arc::new(UserRepository::new(pool)))
    }

    /// Like `new`, with a caller-supplied user store.
    pub fn with_user_store(pool: AsyncDbPool, users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            memberships: MembershipRepository::new(pool.clone()),
            membership_levels: MembershipLevelRepository::new(pool.clone()),
            donations: DonationRepository::new(pool.clone()),
            payments: PaymentRepository::new(pool),
        }
    }
}
