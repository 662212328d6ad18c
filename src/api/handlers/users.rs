//! User management handlers.
//!
//! Users are addressed by phone number, which is unique.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::USER_TAG;
use crate::api::dto::{
    ErrorResponse, PaginationRequest, PaginationResponse, UpdateUserRequest, UserResponse,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::repositories::UserSortField;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

/// Routes for any authenticated user.
pub fn protected_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_profile))
}

/// Routes restricted to admins.
///
/// # Routes
/// - `GET /users` - Paginated user list
/// - `GET|PUT|DELETE /users/{phone}` - Single user by phone
pub fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_users))
        .routes(routes!(get_user, update_user, delete_user))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    params(PaginationRequest),
    responses(
        (status = 200, description = "Page of users", body = PaginationResponse<UserResponse>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    )
)]
async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationRequest>,
) -> AppResult<Json<PaginationResponse<UserResponse>>> {
    let query = params.query::<UserSortField>();
    let (users, total) = state.services.users.list_users(&query).await?;

    Ok(Json(
        PaginationResponse::new(users, &params, total).map(UserResponse::from),
    ))
}

#[utoipa::path(
    get,
    path = "/users/profile",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "The caller's user record", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse)
    )
)]
async fn get_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.get_user(auth_user.user_id).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    get,
    path = "/users/{phone}",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    params(("phone" = String, Path, description = "User phone number")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn get_user(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.get_user_by_phone(&phone).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/users/{phone}",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    params(("phone" = String, Path, description = "User phone number")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already taken", body = ErrorResponse)
    )
)]
async fn update_user(
    State(state): State<AppState>,
    Path(phone): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .services
        .users
        .update_user(&phone, payload.into_update_user())
        .await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    delete,
    path = "/users/{phone}",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    params(("phone" = String, Path, description = "User phone number")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn delete_user(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> AppResult<StatusCode> {
    state.services.users.delete_user(&phone).await?;
    Ok(StatusCode::NO_CONTENT)
}
