use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const AUTH_TAG: &str = "Auth";
pub const USER_TAG: &str = "Users";
pub const MEMBERSHIP_TAG: &str = "Membership";
pub const DONATION_TAG: &str = "Donations";
pub const PAYMENT_TAG: &str = "Payments";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EYEA Admin API",
        description = "Members, users, payments and donations for the EYEA admin dashboard",
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::models::Role,
            crate::repositories::SortOrder,
        )
    ),
    tags(
        (name = AUTH_TAG, description = "Login, SSO and token profile"),
        (name = USER_TAG, description = "User management"),
        (name = MEMBERSHIP_TAG, description = "Membership applications and levels"),
        (name = DONATION_TAG, description = "Donations"),
        (name = PAYMENT_TAG, description = "Subscription payments"),
        (name = HEALTH_TAG, description = "Health check"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer Token Authentication"))
                        .build(),
                ),
            )
        }
    }
}
