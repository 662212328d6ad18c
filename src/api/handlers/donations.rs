//! Donation handlers.

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::DONATION_TAG;
use crate::api::dto::{
    CreateDonationRequest, DonationResponse, ErrorResponse, PaginationRequest, PaginationResponse,
    SuccessResponse,
};
use crate::error::AppResult;
use crate::repositories::DonationSortField;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

/// `POST /donation` needs no token.
pub fn public_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(submit_donation))
}

pub fn protected_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(donation_history))
}

#[utoipa::path(
    post,
    path = "/donation",
    tag = DONATION_TAG,
    request_body = CreateDonationRequest,
    responses(
        (status = 201, description = "Donation recorded", body = SuccessResponse<DonationResponse>),
        (status = 400, description = "Invalid donation", body = ErrorResponse)
    )
)]
async fn submit_donation(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDonationRequest>,
) -> AppResult<(StatusCode, Json<SuccessResponse<DonationResponse>>)> {
    let donation = state
        .services
        .donations
        .donate(payload.into_new_donation())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(
            "Donation submitted successfully",
            donation.into(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/donation/history",
    tag = DONATION_TAG,
    security(("bearerAuth" = [])),
    params(PaginationRequest),
    responses(
        (status = 200, description = "Page of donations", body = PaginationResponse<DonationResponse>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
async fn donation_history(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationRequest>,
) -> AppResult<Json<PaginationResponse<DonationResponse>>> {
    let query = params.query::<DonationSortField>();
    let (donations, total) = state.services.donations.history(&query).await?;

    Ok(Json(
        PaginationResponse::new(donations, &params, total).map(DonationResponse::from),
    ))
}
