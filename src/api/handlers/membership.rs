//! Membership registration and listing handlers.

use axum::{Extension, Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::MEMBERSHIP_TAG;
use crate::api::dto::{
    ErrorResponse, MembershipLevelResponse, MembershipResponse, PaginationRequest,
    PaginationResponse, RegisterMembershipRequest, SuccessResponse,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::repositories::MembershipSortField;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

pub fn protected_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(register_membership))
        .routes(routes!(list_levels))
}

pub fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(list_memberships))
}

#[utoipa::path(
    post,
    path = "/membership/register",
    tag = MEMBERSHIP_TAG,
    security(("bearerAuth" = [])),
    request_body = RegisterMembershipRequest,
    responses(
        (status = 201, description = "Membership registered", body = SuccessResponse<MembershipResponse>),
        (status = 400, description = "Invalid application or unknown level", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
async fn register_membership(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<RegisterMembershipRequest>,
) -> AppResult<(StatusCode, Json<SuccessResponse<MembershipResponse>>)> {
    let membership = state
        .services
        .memberships
        .register(payload.into_new_membership(auth_user.user_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(
            "Membership registered successfully",
            membership.into(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/membership",
    tag = MEMBERSHIP_TAG,
    security(("bearerAuth" = [])),
    params(PaginationRequest),
    responses(
        (status = 200, description = "Page of memberships", body = PaginationResponse<MembershipResponse>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    )
)]
async fn list_memberships(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationRequest>,
) -> AppResult<Json<PaginationResponse<MembershipResponse>>> {
    let query = params.query::<MembershipSortField>();
    let (memberships, total) = state.services.memberships.list_memberships(&query).await?;

    Ok(Json(
        PaginationResponse::new(memberships, &params, total).map(MembershipResponse::from),
    ))
}

#[utoipa::path(
    get,
    path = "/membership/levels",
    tag = MEMBERSHIP_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "All membership levels", body = Vec<MembershipLevelResponse>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
async fn list_levels(State(state): State<AppState>) -> AppResult<Json<Vec<MembershipLevelResponse>>> {
    let levels = state.services.memberships.list_levels().await?;
    Ok(Json(levels.into_iter().map(Into::into).collect()))
}
