//! Credential login and API-key SSO, both ending in a signed access token.

use std::sync::Arc;

use crate::config::{JwtConfig, SsoConfig};
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, Role, User};
use crate::repositories::UserStore;
use crate::utils::api_key::{keys_match, random_alphanumeric};
use crate::utils::jwt::generate_token;
use crate::utils::password::{hash_password, verify_password};

/// Length of the random password given to SSO-created accounts.
const SSO_PASSWORD_LENGTH: usize = 32;

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const ACCOUNT_INACTIVE: &str = "Account is inactive";

/// A freshly issued token and the user it was issued to.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub user: User,
}

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    jwt: JwtConfig,
    sso: SsoConfig,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, jwt: JwtConfig, sso: SsoConfig) -> Self {
        Self { users, jwt, sso }
    }

    /// Verifies email and password and issues a token.
    ///
    /// Unknown email, inactive account and wrong password all produce the
    /// same `Unauthorized` error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let Some(user) = self.users.find_by_email(email).await? else {
            tracing::warn!(email = %email, "Login failed: unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !user.is_active {
            tracing::warn!(user_id = user.id, "Login failed: account inactive");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        if !verify_password(password, &user.password)? {
            tracing::warn!(user_id = user.id, "Login failed: wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        tracing::info!(user_id = user.id, "User logged in");
        self.issue(user)
    }

    /// Checks a presented SSO key against the configured one. Blank and
    /// missing keys are both "required".
    pub fn verify_api_key(&self, api_key: Option<&str>) -> AppResult<()> {
        let presented = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AppError::unauthorized("API key is required"))?;

        if !keys_match(presented, &self.sso.api_key) {
            tracing::warn!("SSO rejected: invalid API key");
            return Err(AppError::unauthorized("Invalid API key"));
        }
        Ok(())
    }

    /// Authenticates a trusted client by API key and finds or creates the
    /// user owning `phone`.
    ///
    /// A unique violation on insert means a concurrent request created the
    /// same user first; that user is read back and used.
    pub async fn sso(
        &self,
        full_name: &str,
        phone: &str,
        api_key: Option<&str>,
    ) -> AppResult<IssuedToken> {
        self.verify_api_key(api_key)?;

        let user = match self.users.find_by_phone(phone).await? {
            Some(user) => user,
            None => self.create_sso_user(full_name, phone).await?,
        };

        if !user.is_active {
            tracing::warn!(user_id = user.id, "SSO rejected: account inactive");
            return Err(AppError::unauthorized(ACCOUNT_INACTIVE));
        }

        self.issue(user)
    }

    async fn create_sso_user(&self, full_name: &str, phone: &str) -> AppResult<User> {
        let new_user = NewUser {
            full_name: full_name.to_string(),
            email: format!("{}@{}", phone, self.sso.email_domain),
            phone: phone.to_string(),
            password: hash_password(&random_alphanumeric(SSO_PASSWORD_LENGTH))?,
            role: Role::User,
            is_active: true,
        };

        match self.users.create(new_user).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "Created user via SSO");
                Ok(user)
            }
            Err(AppError::Duplicate { field, .. }) => {
                tracing::debug!(field = %field, "Concurrent SSO create, reading existing user");
                self.users
                    .find_by_phone(phone)
                    .await?
                    .ok_or_else(|| AppError::Duplicate {
                        entity: "users".to_string(),
                        field,
                        value: phone.to_string(),
                    })
            }
            Err(e) => Err(e),
        }
    }

    fn issue(&self, user: User) -> AppResult<IssuedToken> {
        let token = generate_token(&user, &self.jwt.secret, self.jwt.expiration_hours)?;
        Ok(IssuedToken { token, user })
    }
}
