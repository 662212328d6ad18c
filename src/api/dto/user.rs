//! User-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Role, UpdateUser, User};

/// Request body for updating a user; omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "Full name must be between 1 and 255 characters"))]
    pub full_name: Option<String>,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    #[schema(format = "email")]
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser {
            full_name: self.full_name,
            email: self.email,
            is_active: self.is_active,
            updated_at: None,
        }
    }
}

/// Response body for user data (excludes the password hash).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[schema(example = "251742219814@eyea.org")]
    pub email: String,
    #[schema(example = "251742219814")]
    pub phone: String,
    pub role: Role,
    pub is_active: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: jiff::Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: jiff::Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at.to_jiff(),
            updated_at: user.updated_at.to_jiff(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::sample_user;

    #[test]
    fn test_response_hides_password() {
        let json = serde_json::to_value(UserResponse::from(sample_user(
            3,
            "251911000003",
            Role::User,
        )))
        .unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn test_update_request_validation() {
        let bad: UpdateUserRequest =
            serde_json::from_value(serde_json::json!({ "email": "not-an-email" })).unwrap();
        assert!(bad.validate().is_err());

        let long: UpdateUserRequest = serde_json::from_value(serde_json::json!({
            "email": format!("{}@example.com", "a".repeat(250))
        }))
        .unwrap();
        assert!(long.validate().is_err());

        let good: UpdateUserRequest =
            serde_json::from_value(serde_json::json!({ "isActive": false })).unwrap();
        assert!(good.validate().is_ok());
        assert_eq!(good.into_update_user().is_active, Some(false));
    }
}
