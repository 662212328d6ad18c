//! JWT authentication middleware.
//!
//! Validates bearer tokens, exposes the caller as an `AuthUser` request
//! extension and guards admin-only routes.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::Role;
use crate::state::AppState;
use crate::utils::jwt::{Claims, validate_token};

/// Authenticated caller, added to request extensions after successful
/// authentication and extracted in handlers with `Extension<AuthUser>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl TryFrom<Claims> for AuthUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: claims.user_id()?,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// JWT authentication middleware
///
/// # Errors
/// Returns 401 Unauthorized if the header is missing or malformed, or the
/// token is invalid or expired.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    let token = bearer_token(auth_header).ok_or_else(|| {
        AppError::unauthorized("Invalid authorization header format. Expected: Bearer <token>")
    })?;

    let claims = validate_token(token, &state.jwt_config.secret)?;
    let auth_user = AuthUser::try_from(claims)?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Rejects callers without the admin role. Must run after `auth_middleware`.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    if !auth_user.is_admin() {
        tracing::warn!(user_id = auth_user.user_id, "Admin route denied");
        return Err(AppError::Forbidden {
            message: "Admin role required".to_string(),
        });
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, role: Role) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: "test@eyea.org".to_string(),
            role,
            iat: 0,
            exp: 9_999_999_999,
        }
    }

    #[test]
    fn test_auth_user_from_claims() {
        let auth_user = AuthUser::try_from(claims("123", Role::Admin)).unwrap();
        assert_eq!(auth_user.user_id, 123);
        assert!(auth_user.is_admin());
    }

    #[test]
    fn test_auth_user_rejects_non_numeric_subject() {
        assert!(matches!(
            AuthUser::try_from(claims("abc", Role::User)),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer"), None);
    }
}
