use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Role, User};

/// Claims carried by an access token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    pub role: Role,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration time (unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: i32, email: String, role: Role, expiration_hours: i64) -> Self {
        let iat = jiff::Timestamp::now().as_second();

        Self {
            sub: user_id.to_string(),
            email,
            role,
            iat,
            exp: iat + expiration_hours * 3600,
        }
    }

    /// The numeric user id in `sub`.
    pub fn user_id(&self) -> AppResult<i32> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid token subject"))
    }
}

/// Signs an HS256 access token for `user`.
pub fn generate_token(user: &User, secret: &str, expiration_hours: i64) -> AppResult<String> {
    let claims = Claims::new(user.id, user.email.clone(), user.role, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {}", e),
    })
}

/// Verifies signature and expiry and returns the decoded claims.
pub fn validate_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::unauthorized("Token has expired"),
        ErrorKind::InvalidToken => AppError::unauthorized("Invalid token"),
        ErrorKind::InvalidSignature => AppError::unauthorized("Invalid token signature"),
        _ => AppError::unauthorized(format!("Token validation failed: {}", e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::sample_user;

    const TEST_SECRET: &str = "test_secret_key_for_jwt_testing_0123";

    #[test]
    fn test_generate_and_validate_token() {
        let user = sample_user(7, "251911223344", Role::Admin);
        let token = generate_token(&user, TEST_SECRET, 24).unwrap();
        assert_eq!(token.matches('.').count(), 2);

        let claims = validate_token(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_validate_token_invalid_secret() {
        let user = sample_user(1, "251911223344", Role::User);
        let token = generate_token(&user, TEST_SECRET, 1).unwrap();

        match validate_token(&token, "another_secret_key_that_is_long_enough") {
            Err(AppError::Unauthorized { message }) => assert!(message.contains("signature")),
            other => panic!("Expected Unauthorized error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_token_invalid_format() {
        match validate_token("not-a-jwt", TEST_SECRET) {
            Err(AppError::Unauthorized { message }) => {
                assert!(message.contains("Invalid token") || message.contains("validation"))
            }
            other => panic!("Expected Unauthorized error, got {:?}", other),
        }
    }

    #[test]
    fn test_expired_token() {
        let user = sample_user(1, "251911223344", Role::User);
        let token = generate_token(&user, TEST_SECRET, -1).unwrap();

        match validate_token(&token, TEST_SECRET) {
            Err(AppError::Unauthorized { message }) => assert!(message.contains("expired")),
            other => panic!("Expected Unauthorized error for expired token, got {:?}", other),
        }
    }

    #[test]
    fn test_role_is_serialized_lowercase() {
        let claims = Claims::new(1, "a@eyea.org".to_string(), Role::Admin, 1);
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"role\":\"admin\""));
    }

    #[test]
    fn test_non_numeric_subject_is_rejected() {
        let mut claims = Claims::new(1, "a@eyea.org".to_string(), Role::User, 1);
        claims.sub = "abc".to_string();
        assert!(matches!(claims.user_id(), Err(AppError::Unauthorized { .. })));
    }
}
