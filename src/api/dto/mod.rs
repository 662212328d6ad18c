//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain; `pagination`, `envelope` and `error` hold
//! the shared wrappers.

mod auth;
mod donation;
mod envelope;
mod error;
mod health;
mod membership;
mod pagination;
mod payment;
mod user;

pub use auth::{
    LoginRequest, LoginResponse, LoginUser, ProfileResponse, SsoRequest, SsoResponse, SsoUser,
};
pub use donation::{CreateDonationRequest, DonationResponse};
pub use envelope::SuccessResponse;
pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use membership::{MembershipLevelResponse, MembershipResponse, RegisterMembershipRequest};
pub use pagination::{MAX_PAGE_LIMIT, PaginationMeta, PaginationRequest, PaginationResponse};
pub use payment::PaymentResponse;
pub use user::{UpdateUserRequest, UserResponse};
