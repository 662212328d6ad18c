//! HTTP request handlers for API endpoints.
//!
//! Each module exposes route constructors grouped by required access level.

pub mod auth;
pub mod donations;
pub mod health;
pub mod membership;
pub mod payments;
pub mod users;
