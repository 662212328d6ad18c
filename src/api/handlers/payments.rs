use axum::{Extension, Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::PAYMENT_TAG;
use crate::api::dto::{ErrorResponse, PaymentResponse};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;

pub fn protected_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(subscriptions))
}

/// The caller's subscription payments, most recent first.
#[utoipa::path(
    get,
    path = "/payments/subscriptions",
    tag = PAYMENT_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Subscription payments", body = Vec<PaymentResponse>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
async fn subscriptions(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<PaymentResponse>>> {
    let payments = state
        .services
        .payments
        .subscriptions(auth_user.user_id)
        .await?;
    Ok(Json(payments.into_iter().map(Into::into).collect()))
}
