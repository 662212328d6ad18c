//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod auth_service;
mod donation_service;
mod membership_service;
mod payment_service;
mod seed_service;
mod user_service;

pub use auth_service::{AuthService, IssuedToken};
pub use donation_service::DonationService;
pub use membership_service::MembershipService;
pub use payment_service::PaymentService;
pub use seed_service::{SeedService, default_levels};
pub use user_service::UserService;

use crate::config::{JwtConfig, SsoConfig};
use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub users: UserService,
    pub memberships: MembershipService,
    pub donations: DonationService,
    pub payments: PaymentService,
    pub seed: SeedService,
}

impl Services {
    pub fn new(repos: Repositories, jwt: JwtConfig, sso: SsoConfig) -> Self {
        Self {
            auth: AuthService::new(repos.users.clone(), jwt, sso),
            users: UserService::new(repos.users.clone()),
            memberships: MembershipService::new(repos.memberships, repos.membership_levels.clone()),
            donations: DonationService::new(repos.donations),
            payments: PaymentService::new(repos.payments),
            seed: SeedService::new(repos.users, repos.membership_levels),
        }
    }
}
