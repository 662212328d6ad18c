//! Authentication handlers: password login, API-key SSO and token profile.

use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::{Extension, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{
    ErrorResponse, LoginRequest, LoginResponse, ProfileResponse, SsoRequest, SsoResponse,
};
use crate::api::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Header carrying the SSO API key.
pub const API_KEY_HEADER: &str = "x-key";

/// The verified `X-KEY` header of an SSO call.
///
/// Extracted from the request head, so a bad key is rejected before the
/// body is read or validated.
pub struct SsoApiKey(pub String);

impl FromRequestParts<AppState> for SsoApiKey {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> AppResult<Self> {
        let presented = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());
        state.services.auth.verify_api_key(presented)?;
        Ok(SsoApiKey(presented.unwrap_or_default().to_string()))
    }
}

/// Routes reachable without a token.
///
/// # Routes
/// - `POST /auth/login` - Authenticate with email and password
/// - `POST /auth/sso` - Phone-number SSO gated by the `X-KEY` header
pub fn public_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(login))
        .routes(routes!(sso))
}

/// Routes requiring a valid token.
pub fn protected_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(profile))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let issued = state
        .services
        .auth
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        access_token: issued.token,
        user: issued.user.into(),
    }))
}

/// Finds or creates the user owning `phoneNumber` and issues a token.
#[utoipa::path(
    post,
    path = "/auth/sso",
    tag = AUTH_TAG,
    request_body = SsoRequest,
    params(
        ("X-KEY" = String, Header, description = "Shared SSO API key")
    ),
    responses(
        (status = 200, description = "Token issued", body = SsoResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    )
)]
async fn sso(
    State(state): State<AppState>,
    SsoApiKey(api_key): SsoApiKey,
    ValidatedJson(payload): ValidatedJson<SsoRequest>,
) -> AppResult<Json<SsoResponse>> {
    let issued = state
        .services
        .auth
        .sso(&payload.full_name, &payload.phone_number, Some(&api_key))
        .await?;

    Ok(Json(SsoResponse {
        status: "success".to_string(),
        token: issued.token,
        user: issued.user.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/auth/profile",
    tag = AUTH_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Caller identity", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
async fn profile(Extension(auth_user): Extension<AuthUser>) -> Json<ProfileResponse> {
    Json(auth_user.into())
}
