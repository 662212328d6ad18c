//! Authentication-related Data Transfer Objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::middleware::AuthUser;
use crate::models::{Role, User};

/// Login request payload
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    #[schema(example = "admin@eyea.org", format = "email")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "password123", format = "password")]
    pub password: String,
}

/// Login response with the access token and a user summary
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub access_token: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "admin@eyea.org")]
    pub email: String,
    #[schema(example = "EYEA Admin")]
    pub full_name: String,
    pub role: Role,
    #[schema(example = "251911000000")]
    pub phone: String,
}

impl From<User> for LoginUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            phone: user.phone,
        }
    }
}

/// SSO request payload; the API key travels in the `X-KEY` header
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SsoRequest {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[validate(length(min = 7, max = 32, message = "Phone number must be between 7 and 32 characters"))]
    #[schema(example = "251742219814")]
    pub phone_number: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SsoResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub token: String,
    pub user: SsoUser,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SsoUser {
    #[schema(example = 42)]
    pub id: i32,
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[schema(example = "251742219814")]
    pub phone_number: String,
}

impl From<User> for SsoUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            phone_number: user.phone,
        }
    }
}

/// The caller's identity as carried by the token
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "admin@eyea.org")]
    pub email: String,
    pub role: Role,
}

impl From<AuthUser> for ProfileResponse {
    fn from(auth: AuthUser) -> Self {
        Self {
            id: auth.user_id,
            email: auth.email,
            role: auth.role,
        }
    }
}
